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

//! # Record Inspection Module
//!
//! Turns a sample of dataset records into human-inspectable artifacts.
//!
//! ## Module Components
//!
//! - **Stringify** ([stringify.rs](stringify/index.html)): Canonical text for field values
//! - **Naming** ([naming.rs](naming/index.html)): Timestamped output directory names
//! - **Exporter** ([exporter.rs](exporter/index.html)): The inspection run itself
//!
//! ## Usage Patterns
//!
//! ```rust
//! use zi_inspect::inspect::{ZiInspectConfig, ZiInspector};
//! use zi_inspect::ingest::ZiTfRecordDataset;
//!
//! let dataset = ZiTfRecordDataset::load("gs-export/tfrecords")?;
//! let config = ZiInspectConfig {
//!     split: "VALIDATION".to_string(),
//!     num_records: 10,
//!     ..Default::default()
//! };
//! let output_dir = ZiInspector::new().with_config(config).inspect(&dataset)?;
//! ```

pub mod exporter;
pub mod naming;
pub mod stringify;

pub use exporter::{inspect, ZiInspectConfig, ZiInspectReport, ZiInspector};
pub use naming::{get_timestamp, ZiClock, ZiFixedClock, ZiOutputNamer, ZiSystemClock, TIMESTAMP_FORMAT};
pub use stringify::stringify;
