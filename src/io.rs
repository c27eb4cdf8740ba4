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

//! Local filesystem helpers shared by inspection runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ZiError};

/// Conventional log file name inside an output directory.
pub const LOGFILE: &str = "tfrecorder.log";

/// Filesystem façade for output scopes and log files.
pub struct ZiIO;

impl ZiIO {
    /// Creates `path` as a new directory, creating missing ancestors.
    ///
    /// The leaf must not exist yet: output scopes are never shared between
    /// runs. Nothing is cleaned up if creation fails part way.
    pub fn create_fresh_dir(path: &Path) -> Result<()> {
        let to_error = |e: std::io::Error| ZiError::directory_create(path.display().to_string(), e.to_string());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_error)?;
            }
        }
        fs::create_dir(path).map_err(to_error)
    }

    /// Copies `logfile` to `output_dir/tfrecorder.log`, creating `output_dir`
    /// when needed. Returns the destination path.
    pub fn copy_logfile(logfile: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let logfile = logfile.as_ref();
        let output_dir = output_dir.as_ref();
        let destination = output_dir.join(LOGFILE);

        fs::create_dir_all(output_dir)?;
        match fs::copy(logfile, &destination) {
            Ok(bytes) => {
                log::debug!(
                    "Copied {} bytes of {} to {}",
                    bytes,
                    logfile.display(),
                    destination.display()
                );
                Ok(destination)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ZiError::Io(format!(
                "unable to copy log file {}: not found",
                logfile.display()
            ))),
            Err(e) => Err(ZiError::Io(format!(
                "unable to copy log file {}: {}",
                logfile.display(),
                e
            ))),
        }
    }
}
