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

//! # Zi Inspect
//!
//! Diagnostic export for TFRecord datasets written by the Zi conversion
//! pipeline. Given a directory of record shards it loads one split, pulls a
//! bounded sample of records and writes them out as a CSV of scalar and
//! metadata fields plus the decoded image files, if records carry any.
//!
//! ## Module Overview
//!
//! - **record**: ZiRecord, ZiFieldValue and ZiHeader
//! - **ingest**: Shard discovery, TFRecord framing and Example decoding
//! - **domain**: Image payload decoding and the reserved image field names
//! - **export**: CSV sink
//! - **inspect**: Stringification, output naming and the inspection run
//! - **io**: Output directory creation and log file copying
//!
//! ## Feature Flags
//!
//! - `compression` (default): GZIP / ZLIB compressed shards
//!
//! ## Quick Start
//!
//! ```rust
//! let output_dir = zi_inspect::inspect("tfrecords/", "TRAIN", 5, "output")?;
//! println!("Output written to {}", output_dir.display());
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. A run either completes and
//! returns its output directory or aborts on the first error; a directory
//! left behind by an aborted run is incomplete.

pub mod domain;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod inspect;
pub mod io;
pub mod record;

pub use errors::{Result, ZiError};
pub use record::{ZiFieldValue, ZiHeader, ZiRecord};

pub use domain::{ZiColorSpace, ZiImageEncoding, ZiImagePayload, ZiImageSchema};
pub use export::{ZiCsvSink, ZiWriteStats};
pub use ingest::{
    ZiCompression, ZiDataset, ZiMemoryDataset, ZiMemorySource, ZiReaderConfig, ZiRecordSource,
    ZiSplit, ZiTfRecordDataset,
};
pub use inspect::{
    get_timestamp, inspect, stringify, ZiClock, ZiFixedClock, ZiInspectConfig, ZiInspectReport,
    ZiInspector, ZiOutputNamer,
};
pub use io::{ZiIO, LOGFILE};
