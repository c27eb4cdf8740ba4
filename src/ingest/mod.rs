//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
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

//! # Data Ingestion Module
//!
//! This module reads the TFRecord shards produced by the conversion pipeline
//! and exposes them as split-addressable, lazily decoded record sources.
//!
//! ## Module Components
//!
//! - **Format** ([format.rs](format/index.html)): Shard compression detection
//! - **Reader** ([reader.rs](reader/index.html)): TFRecord framing and checksums
//! - **Example** ([example.rs](example/index.html)): `tf.train.Example` decoding
//! - **Dataset** ([dataset.rs](dataset/index.html)): Split discovery and record sources
//!
//! ## Supported Compression
//!
//! - **Gzip**: .gz shards
//! - **Zlib**: .zz / .zlib shards
//!
//! ## Usage Patterns
//!
//! ```rust
//! use zi_inspect::ingest::{ZiDataset, ZiTfRecordDataset};
//!
//! let dataset = ZiTfRecordDataset::load(&dir)?;
//! let first = dataset.split("TRAIN")?.records()?.next();
//! ```

pub mod dataset;
pub mod example;
pub mod format;
pub mod reader;

pub use dataset::{
    ZiDataset, ZiMemoryDataset, ZiMemorySource, ZiRecordSource, ZiRecordStream, ZiShardSource,
    ZiSplit, ZiTfRecordDataset,
};
pub use example::{decode_record, Example};
pub use format::{detect_from_path, ZiCompression};
pub use reader::{
    frame_record, masked_crc32c, open_shard, ZiReaderConfig, ZiRecordIterator, ZiTfRecordReader,
};
