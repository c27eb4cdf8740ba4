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

//! # Split-partitioned Datasets
//!
//! A dataset maps each [`ZiSplit`] to a [`ZiRecordSource`]. Every call to
//! [`ZiRecordSource::records`] starts a fresh, lazy pass over the split from
//! its first record; callers bound consumption themselves with `take`.
//!
//! Shards written by the conversion pipeline are named
//! `<split lowercase>-<shard>-of-<count>.tfrecord.gz` and live side by side in
//! one directory.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::ingest::reader::{ZiReaderConfig, ZiRecordIterator};
use crate::record::ZiRecord;

/// Named dataset partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZiSplit {
    Train,
    Validation,
    Test,
    Discard,
}

impl ZiSplit {
    pub const ALL: [ZiSplit; 4] = [
        ZiSplit::Train,
        ZiSplit::Validation,
        ZiSplit::Test,
        ZiSplit::Discard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZiSplit::Train => "TRAIN",
            ZiSplit::Validation => "VALIDATION",
            ZiSplit::Test => "TEST",
            ZiSplit::Discard => "DISCARD",
        }
    }

    /// File name prefix of this split's shards.
    pub fn shard_prefix(&self) -> &'static str {
        match self {
            ZiSplit::Train => "train",
            ZiSplit::Validation => "validation",
            ZiSplit::Test => "test",
            ZiSplit::Discard => "discard",
        }
    }
}

impl fmt::Display for ZiSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZiSplit {
    type Err = ZiError;

    /// Exact, upper-case match; anything else is an unknown split.
    fn from_str(s: &str) -> Result<Self> {
        ZiSplit::ALL
            .iter()
            .copied()
            .find(|split| split.as_str() == s)
            .ok_or_else(|| ZiError::split_not_found(s))
    }
}

/// Lazily produced record sequence, finite or infinite.
pub type ZiRecordStream<'a> = Box<dyn Iterator<Item = Result<ZiRecord>> + 'a>;

/// Records of one split.
pub trait ZiRecordSource {
    /// Starts a new pass over the split from its first record.
    fn records(&self) -> Result<ZiRecordStream<'_>>;
}

/// A collection of splits addressable by name.
pub trait ZiDataset {
    /// Looks up a split by name, failing with [`ZiError::SplitNotFound`] when
    /// the name is unknown or the split holds no data.
    fn split(&self, name: &str) -> Result<&dyn ZiRecordSource>;

    /// Splits that hold data, in declaration order.
    fn splits(&self) -> Vec<ZiSplit>;
}

/// The shards of one split on local disk.
#[derive(Clone, Debug)]
pub struct ZiShardSource {
    split: ZiSplit,
    shards: Vec<PathBuf>,
    config: ZiReaderConfig,
}

impl ZiShardSource {
    pub fn new(split: ZiSplit, shards: Vec<PathBuf>, config: ZiReaderConfig) -> Self {
        Self { split, shards, config }
    }

    pub fn split(&self) -> ZiSplit {
        self.split
    }

    pub fn shards(&self) -> &[PathBuf] {
        &self.shards
    }
}

impl ZiRecordSource for ZiShardSource {
    fn records(&self) -> Result<ZiRecordStream<'_>> {
        Ok(Box::new(ZiRecordIterator::new(
            self.shards.clone(),
            self.config.clone(),
        )))
    }
}

/// TFRecord shards discovered under one directory.
#[derive(Clone, Debug)]
pub struct ZiTfRecordDataset {
    root: PathBuf,
    sources: BTreeMap<ZiSplit, ZiShardSource>,
}

impl ZiTfRecordDataset {
    /// Discovers shards under `dir` with the default reader configuration.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(dir, ZiReaderConfig::default())
    }

    /// Discovers `<prefix>-*.tfrecord*` shards for every split under `dir`.
    ///
    /// `dir` must be an existing directory. Splits without shards are simply
    /// absent from the dataset.
    pub fn load_with_config(dir: impl AsRef<Path>, config: ZiReaderConfig) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ZiError::validation(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let mut sources = BTreeMap::new();
        for split in ZiSplit::ALL {
            let pattern = format!("{}/{}-*.tfrecord*", escaped_root, split.shard_prefix());
            let mut shards = Vec::new();
            for entry in glob::glob(&pattern)? {
                let path = entry?;
                if path.is_file() {
                    shards.push(path);
                }
            }
            shards.sort();

            if shards.is_empty() {
                continue;
            }
            log::debug!("Found {} shard(s) for split {}", shards.len(), split);
            sources.insert(split, ZiShardSource::new(split, shards, config.clone()));
        }

        if sources.is_empty() {
            log::warn!("No TFRecord shards found under {}", root.display());
        }

        Ok(Self { root, sources })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self, split: ZiSplit) -> Option<&ZiShardSource> {
        self.sources.get(&split)
    }
}

impl ZiDataset for ZiTfRecordDataset {
    fn split(&self, name: &str) -> Result<&dyn ZiRecordSource> {
        let split = name.parse::<ZiSplit>()?;
        self.sources
            .get(&split)
            .map(|source| source as &dyn ZiRecordSource)
            .ok_or_else(|| ZiError::split_not_found(name))
    }

    fn splits(&self) -> Vec<ZiSplit> {
        self.sources.keys().copied().collect()
    }
}

/// Records of one split held in memory.
#[derive(Clone, Debug, Default)]
pub struct ZiMemorySource {
    records: Vec<ZiRecord>,
    cycle: bool,
}

impl ZiMemorySource {
    pub fn new(records: Vec<ZiRecord>) -> Self {
        Self {
            records,
            cycle: false,
        }
    }

    /// Repeats the records endlessly; an empty source stays empty.
    pub fn cycling(records: Vec<ZiRecord>) -> Self {
        Self {
            records,
            cycle: true,
        }
    }
}

impl ZiRecordSource for ZiMemorySource {
    fn records(&self) -> Result<ZiRecordStream<'_>> {
        if self.cycle {
            Ok(Box::new(self.records.iter().cloned().cycle().map(Ok)))
        } else {
            Ok(Box::new(self.records.iter().cloned().map(Ok)))
        }
    }
}

/// In-memory dataset, mainly for programmatic use and tests.
#[derive(Clone, Debug, Default)]
pub struct ZiMemoryDataset {
    sources: BTreeMap<ZiSplit, ZiMemorySource>,
}

impl ZiMemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split(mut self, split: ZiSplit, records: Vec<ZiRecord>) -> Self {
        self.sources.insert(split, ZiMemorySource::new(records));
        self
    }

    pub fn with_source(mut self, split: ZiSplit, source: ZiMemorySource) -> Self {
        self.sources.insert(split, source);
        self
    }
}

impl ZiDataset for ZiMemoryDataset {
    fn split(&self, name: &str) -> Result<&dyn ZiRecordSource> {
        let split = name.parse::<ZiSplit>()?;
        self.sources
            .get(&split)
            .map(|source| source as &dyn ZiRecordSource)
            .ok_or_else(|| ZiError::split_not_found(name))
    }

    fn splits(&self) -> Vec<ZiSplit> {
        self.sources.keys().copied().collect()
    }
}
