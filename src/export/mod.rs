//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Data Export Module
//!
//! Output sinks for inspection runs.
//!
//! ## Module Components
//!
//! - **Writer** ([writer.rs](writer/index.html)): Row-oriented CSV sink
//!
//! ## Usage Patterns
//!
//! ```rust
//! use zi_inspect::export::ZiCsvSink;
//!
//! let mut sink = ZiCsvSink::create(&dir.join("data.csv"))?;
//! sink.write_header(&header)?;
//! sink.write_row(["1", "a.png"])?;
//! let stats = sink.finish()?;
//! ```

pub mod writer;

pub use writer::{ZiCsvSink, ZiWriteStats};
