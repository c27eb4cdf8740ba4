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

//! # Inspection Exporter
//!
//! Dumps a bounded sample of one split into a fresh output directory:
//!
//! ```text
//! <output_dir>/check-tfrecords-<YYYYMMDD-HHMMSS>/
//!     data.csv                  # header row + one row per sampled record
//!     <image_basename>...       # one file per record carrying an image name
//! ```
//!
//! A run moves through its stages strictly in order: resolve the split,
//! create the output directory, open the CSV sink, derive the header from
//! one record, then sample up to `num_records` records. The header peek and
//! the sample loop are two separate passes over the split, each started from
//! the first record.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::image::{ZiImagePayload, ZiImageSchema};
use crate::errors::{Result, ZiError};
use crate::export::writer::ZiCsvSink;
use crate::ingest::dataset::{ZiDataset, ZiRecordSource, ZiTfRecordDataset};
use crate::inspect::naming::{ZiClock, ZiOutputNamer};
use crate::inspect::stringify::stringify;
use crate::io::ZiIO;
use crate::record::{ZiFieldValue, ZiHeader};

/// Configuration for an inspection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiInspectConfig {
    /// Split to sample (`TRAIN`, `VALIDATION`, `TEST` or `DISCARD`).
    pub split: String,
    /// Upper bound on sampled records.
    pub num_records: usize,
    /// Parent of the per-run output directory.
    pub output_dir: PathBuf,
    /// Per-run directory name prefix, followed by `-<timestamp>`.
    pub dir_prefix: String,
    /// CSV file name inside the run directory.
    pub csv_name: String,
    /// Reserved image field names.
    pub image_schema: ZiImageSchema,
}

impl Default for ZiInspectConfig {
    fn default() -> Self {
        Self {
            split: "TRAIN".to_string(),
            num_records: 1,
            output_dir: PathBuf::from("output"),
            dir_prefix: "check-tfrecords".to_string(),
            csv_name: "data.csv".to_string(),
            image_schema: ZiImageSchema::default(),
        }
    }
}

impl ZiInspectConfig {
    /// Builds a configuration from (partial) JSON; absent keys keep defaults.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Outcome of a successful inspection run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZiInspectReport {
    pub output_dir: PathBuf,
    pub csv_path: PathBuf,
    /// Empty when the split held no records.
    pub header: ZiHeader,
    pub rows_written: usize,
    /// Image files in the order they were written; repeats mean overwrites.
    pub images_written: Vec<PathBuf>,
}

/// Runs inspections against any [`ZiDataset`].
#[derive(Clone, Debug, Default)]
pub struct ZiInspector {
    config: ZiInspectConfig,
    namer: ZiOutputNamer,
}

impl ZiInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ZiInspectConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the clock used to name output directories.
    pub fn with_clock(mut self, clock: Arc<dyn ZiClock>) -> Self {
        self.namer = ZiOutputNamer::with_clock(clock);
        self
    }

    pub fn config(&self) -> &ZiInspectConfig {
        &self.config
    }

    /// Runs an inspection and returns the output directory.
    pub fn inspect(&self, dataset: &dyn ZiDataset) -> Result<PathBuf> {
        self.inspect_with_report(dataset).map(|report| report.output_dir)
    }

    /// Runs an inspection and returns what was written.
    pub fn inspect_with_report(&self, dataset: &dyn ZiDataset) -> Result<ZiInspectReport> {
        let schema = &self.config.image_schema;

        // Nothing touches the filesystem until the split resolves.
        let source = dataset.split(&self.config.split)?;

        let output_dir = self
            .config
            .output_dir
            .join(self.namer.name(&self.config.dir_prefix));
        ZiIO::create_fresh_dir(&output_dir)?;

        let csv_path = output_dir.join(&self.config.csv_name);
        let mut sink = ZiCsvSink::create(&csv_path)?;

        let header = match derive_header(source, &schema.image)? {
            Some(header) => header,
            None => {
                log::warn!("Split {} holds no records", self.config.split);
                sink.finish()?;
                log::info!("Output written to {}", output_dir.display());
                return Ok(ZiInspectReport {
                    output_dir,
                    csv_path,
                    header: ZiHeader::default(),
                    rows_written: 0,
                    images_written: Vec::new(),
                });
            }
        };
        log::debug!("Derived header {:?}", header.fields());
        sink.write_header(&header)?;

        let mut images_written = Vec::new();
        for (index, record) in source
            .records()?
            .take(self.config.num_records)
            .enumerate()
        {
            let record = record?;

            let row: Vec<String> = header
                .project(&record, index)?
                .into_iter()
                .map(stringify)
                .collect();
            sink.write_row(&row)?;

            if let Some(name) = record.get(&schema.name) {
                let image_path = output_dir.join(image_file_name(name)?);
                ZiImagePayload::from_record(&record, schema, index)?.save(&image_path)?;
                images_written.push(image_path);
            }
        }

        let stats = sink.finish()?;
        log::info!("Output written to {}", output_dir.display());

        Ok(ZiInspectReport {
            output_dir,
            csv_path,
            header,
            rows_written: stats.rows_written,
            images_written,
        })
    }
}

/// Peeks the first record of a fresh pass; `None` for an empty split.
fn derive_header(source: &dyn ZiRecordSource, image_field: &str) -> Result<Option<ZiHeader>> {
    match source.records()?.next() {
        Some(record) => Ok(Some(ZiHeader::from_record(&record?, image_field))),
        None => Ok(None),
    }
}

/// Final `/`-separated component of the stringified image name.
fn image_file_name(name: &ZiFieldValue) -> Result<String> {
    let text = stringify(name);
    let base = text.rsplit('/').next().unwrap_or_default();
    if base.is_empty() || base == "." || base == ".." {
        return Err(ZiError::image(format!(
            "image name '{}' has no file name component",
            text
        )));
    }
    Ok(base.to_string())
}

/// Loads the TFRecord dataset under `tfrecord_dir` and exports `num_records`
/// records of `split` below `output_dir`, returning the run directory.
pub fn inspect(
    tfrecord_dir: impl AsRef<Path>,
    split: &str,
    num_records: usize,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let dataset = ZiTfRecordDataset::load(tfrecord_dir)?;
    let config = ZiInspectConfig {
        split: split.to_string(),
        num_records,
        output_dir: output_dir.as_ref().to_path_buf(),
        ..ZiInspectConfig::default()
    };
    ZiInspector::new().with_config(config).inspect(&dataset)
}
