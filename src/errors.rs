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

//! # Zi Error Module
//!
//! This module defines the error types used throughout the inspection tool.
//!
//! ## Error Categories
//!
//! - **SplitNotFound**: The requested split is absent from the dataset
//! - **DirectoryCreate**: The fresh output directory could not be created
//! - **FieldMissing**: A header field is absent from a later record
//! - **ImageDecode**: An image payload could not be decoded or encoded
//! - **Record**: Corrupt TFRecord framing or malformed Example protobuf
//! - **Io**: Filesystem errors
//! - **Csv**: CSV sink failures
//! - **Validation**: Invalid parameters or inputs
//! - **Serde**: Serialization/deserialization errors
//!
//! None of these are retried; every variant aborts an inspection run.
//!
//! ## Usage
//!
//! ```rust
//! use zi_inspect::errors::{Result, ZiError};
//!
//! fn example(split: &str) -> Result<()> {
//!     if split.is_empty() {
//!         return Err(ZiError::validation("split name cannot be empty"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convience result type used throughout Zi Inspect.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Inspect.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// The requested split has no data in the dataset.
    #[error("could not load data for split '{split}'")]
    SplitNotFound { split: String },

    /// The per-run output directory could not be created.
    #[error("failed to create output directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// A field named by the header (or the image schema) is absent from a record.
    #[error("record {record} is missing field '{field}'")]
    FieldMissing { field: String, record: usize },

    /// The image payload or its geometry could not be turned into an image file.
    #[error("image decode error: {message}")]
    ImageDecode { message: String },

    /// Corrupt TFRecord framing or a malformed Example message.
    #[error("record error in '{source_path}': {message}")]
    Record { source_path: String, message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Failures while writing the CSV sink.
    #[error("csv error: {0}")]
    Csv(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        ZiError::Csv(err.to_string())
    }
}

impl From<image::ImageError> for ZiError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => ZiError::Io(e.to_string()),
            other => ZiError::image(other.to_string()),
        }
    }
}

impl From<glob::PatternError> for ZiError {
    fn from(err: glob::PatternError) -> Self {
        ZiError::validation(format!("invalid shard pattern: {}", err))
    }
}

impl From<glob::GlobError> for ZiError {
    fn from(err: glob::GlobError) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct split lookup failures.
    pub fn split_not_found<T: Into<String>>(split: T) -> Self {
        ZiError::SplitNotFound {
            split: split.into(),
        }
    }

    /// Helper to construct missing field errors.
    pub fn field_missing(field: impl Into<String>, record: usize) -> Self {
        ZiError::FieldMissing {
            field: field.into(),
            record,
        }
    }

    /// Helper to construct image errors.
    pub fn image<T: Into<String>>(message: T) -> Self {
        ZiError::ImageDecode {
            message: message.into(),
        }
    }

    /// Helper to construct record errors tied to a shard path.
    pub fn record(source_path: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Record {
            source_path: source_path.into(),
            message: message.into(),
        }
    }

    /// Helper to construct directory creation errors.
    pub fn directory_create(path: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::DirectoryCreate {
            path: path.into(),
            message: message.into(),
        }
    }
}
