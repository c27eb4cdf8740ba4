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

//! # CSV Sink
//!
//! Row-at-a-time CSV output for inspection runs. The sink owns its file for
//! the whole run; dropping it (on success or on an early error return)
//! flushes and closes the file.
//!
//! A record with no fields is written as an empty line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::record::ZiHeader;

/// Statistics about write operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiWriteStats {
    /// Whether a header row was written.
    pub header_written: bool,
    /// Number of data rows written (header excluded).
    pub rows_written: usize,
}

/// CSV writer bound to one file.
pub struct ZiCsvSink {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
    stats: ZiWriteStats,
}

impl std::fmt::Debug for ZiCsvSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiCsvSink")
            .field("path", &self.path)
            .field("stats", &self.stats)
            .finish()
    }
}

impl ZiCsvSink {
    /// Creates (or truncates) the CSV file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: csv::Writer::from_writer(BufWriter::new(file)),
            path: path.to_path_buf(),
            stats: ZiWriteStats::default(),
        })
    }

    pub fn write_header(&mut self, header: &ZiHeader) -> Result<()> {
        if header.is_empty() {
            self.write_blank_line()?;
        } else {
            self.writer.write_record(header.fields())?;
        }
        self.stats.header_written = true;
        Ok(())
    }

    pub fn write_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let row: Vec<S> = row.into_iter().collect();
        if row.is_empty() {
            self.write_blank_line()?;
        } else {
            self.writer.write_record(row)?;
        }
        self.stats.rows_written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> &ZiWriteStats {
        &self.stats
    }

    /// csv writes an empty record as `""`; bypass it for a bare terminator.
    fn write_blank_line(&mut self) -> Result<()> {
        self.writer.flush()?;
        (&mut self.writer.get_ref().get_ref()).write_all(b"\n")?;
        Ok(())
    }

    /// Flushes buffered rows and closes the file.
    pub fn finish(mut self) -> Result<ZiWriteStats> {
        self.writer.flush()?;
        Ok(self.stats.clone())
    }
}
