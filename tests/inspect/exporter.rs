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

#[path = "../common/mod.rs"]
mod common;

use std::cell::Cell;
use std::fs;
use std::path::Path;

use common::{file_names, fixed_clock, image_record, read_csv, tabular_record, write_shard, FIXED_DIR};
use zi_inspect::ingest::ZiRecordStream;
use zi_inspect::{
    inspect, Result, ZiDataset, ZiError, ZiInspectConfig, ZiInspector, ZiMemoryDataset,
    ZiMemorySource, ZiRecord, ZiRecordSource, ZiSplit,
};

fn inspector(output_dir: &Path, split: &str, num_records: usize) -> ZiInspector {
    ZiInspector::new()
        .with_config(ZiInspectConfig {
            split: split.to_string(),
            num_records,
            output_dir: output_dir.to_path_buf(),
            ..ZiInspectConfig::default()
        })
        .with_clock(fixed_clock())
}

fn image_split() -> Vec<ZiRecord> {
    vec![
        image_record(1, "a.png", 2, 2, 3),
        image_record(2, "dir/b.png", 2, 2, 3),
        image_record(3, "c.png", 2, 2, 3),
    ]
}

#[test]
fn test_exports_bounded_sample_with_images() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, image_split());

    let report = inspector(temp.path(), "TRAIN", 2)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert_eq!(report.output_dir, temp.path().join(FIXED_DIR));
    assert_eq!(report.rows_written, 2);
    assert_eq!(
        read_csv(&report.csv_path),
        vec![
            vec!["id", "image_name", "image_width", "image_height", "image_channels"],
            vec!["1", "a.png", "2", "2", "3"],
            vec!["2", "dir/b.png", "2", "2", "3"],
        ]
    );
    assert_eq!(file_names(&report.output_dir), vec!["a.png", "b.png", "data.csv"]);

    let decoded = image::open(report.output_dir.join("a.png")).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (2, 2));
    assert_eq!(decoded.color().channel_count(), 3);
}

#[test]
fn test_csv_has_num_records_plus_one_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let records: Vec<_> = (0..10).map(|i| tabular_record(i, "x", 0.5)).collect();
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Validation, records);

    let output = inspector(temp.path(), "VALIDATION", 4)
        .inspect(&dataset)
        .expect("inspect");

    let content = fs::read_to_string(output.join("data.csv")).expect("csv");
    assert_eq!(content.lines().count(), 5);
    assert_eq!(content.lines().next(), Some("id,label,score"));
    assert_eq!(content.lines().nth(1), Some("0,x,0.5"));
}

#[test]
fn test_short_split_writes_every_record() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, image_split());

    let report = inspector(temp.path(), "TRAIN", 50)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert_eq!(report.rows_written, 3);
    assert_eq!(report.images_written.len(), 3);
}

#[test]
fn test_repeated_image_names_overwrite_one_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let records: Vec<_> = (0..3).map(|_| image_record(1, "a.png", 4, 4, 3)).collect();
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, records);

    let report = inspector(temp.path(), "TRAIN", 2)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert_eq!(file_names(&report.output_dir), vec!["a.png", "data.csv"]);
    assert_eq!(report.images_written.len(), 2);
    assert_eq!(
        fs::read_to_string(&report.csv_path).expect("csv"),
        "id,image_name,image_width,image_height,image_channels\n1,a.png,4,4,3\n1,a.png,4,4,3\n"
    );
}

#[test]
fn test_image_only_records_write_blank_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let payload_only = ZiRecord::new().with_field("image", b"AAAA".to_vec());
    let dataset =
        ZiMemoryDataset::new().with_split(ZiSplit::Train, vec![payload_only.clone(), payload_only]);

    let report = inspector(temp.path(), "TRAIN", 2)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert!(report.header.is_empty());
    assert_eq!(report.rows_written, 2);
    assert_eq!(fs::read_to_string(&report.csv_path).expect("csv"), "\n\n\n");
}

#[test]
fn test_records_without_image_name_write_no_images() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new()
        .with_split(ZiSplit::Test, vec![tabular_record(1, "a", 1.0), tabular_record(2, "b", 2.0)]);

    let report = inspector(temp.path(), "TEST", 2)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert!(report.images_written.is_empty());
    assert_eq!(file_names(&report.output_dir), vec!["data.csv"]);
}

#[test]
fn test_unknown_split_creates_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output_dir = temp.path().join("out");
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, image_split());

    let result = inspector(&output_dir, "DISCARD", 1).inspect(&dataset);

    assert!(matches!(result, Err(ZiError::SplitNotFound { split }) if split == "DISCARD"));
    assert!(!output_dir.exists());
}

#[test]
fn test_missing_header_field_aborts_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_split(
        ZiSplit::Train,
        vec![
            tabular_record(1, "a", 1.0),
            ZiRecord::new().with_field("id", 2i64).with_field("score", 2.0f32),
        ],
    );

    let result = inspector(temp.path(), "TRAIN", 2).inspect(&dataset);

    match result {
        Err(ZiError::FieldMissing { field, record }) => {
            assert_eq!(field, "label");
            assert_eq!(record, 1);
        }
        other => panic!("expected FieldMissing, got {:?}", other),
    }
}

#[test]
fn test_bad_image_payload_aborts_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let broken = image_record(1, "a.png", 2, 2, 3).with_field("image_width", 3i64);
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, vec![broken]);

    let result = inspector(temp.path(), "TRAIN", 1).inspect(&dataset);
    assert!(matches!(result, Err(ZiError::ImageDecode { .. })));
}

#[test]
fn test_empty_split_writes_empty_csv() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, vec![]);

    let report = inspector(temp.path(), "TRAIN", 3)
        .inspect_with_report(&dataset)
        .expect("inspect");

    assert!(report.header.is_empty());
    assert_eq!(report.rows_written, 0);
    assert_eq!(fs::read_to_string(&report.csv_path).expect("csv"), "");
}

#[test]
fn test_cycling_source_is_bounded_by_num_records() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_source(
        ZiSplit::Train,
        ZiMemorySource::cycling(vec![tabular_record(1, "a", 1.0)]),
    );

    let report = inspector(temp.path(), "TRAIN", 7)
        .inspect_with_report(&dataset)
        .expect("inspect");
    assert_eq!(report.rows_written, 7);
}

struct CountingSource {
    records: Vec<ZiRecord>,
    passes: Cell<usize>,
}

impl ZiRecordSource for CountingSource {
    fn records(&self) -> Result<ZiRecordStream<'_>> {
        self.passes.set(self.passes.get() + 1);
        Ok(Box::new(self.records.iter().cloned().map(Ok)))
    }
}

struct SingleSplit(CountingSource);

impl ZiDataset for SingleSplit {
    fn split(&self, name: &str) -> Result<&dyn ZiRecordSource> {
        match name {
            "TRAIN" => Ok(&self.0 as &dyn ZiRecordSource),
            other => Err(ZiError::split_not_found(other)),
        }
    }

    fn splits(&self) -> Vec<ZiSplit> {
        vec![ZiSplit::Train]
    }
}

#[test]
fn test_header_peek_and_sample_are_separate_passes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = SingleSplit(CountingSource {
        records: vec![tabular_record(1, "a", 1.0), tabular_record(2, "b", 2.0)],
        passes: Cell::new(0),
    });

    let output = inspector(temp.path(), "TRAIN", 2)
        .inspect(&dataset)
        .expect("inspect");

    assert_eq!(dataset.0.passes.get(), 2);
    let rows = read_csv(&output.join("data.csv"));
    assert_eq!(rows[1][0], "1");
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_same_second_collision_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dataset = ZiMemoryDataset::new().with_split(ZiSplit::Train, image_split());
    let runner = inspector(temp.path(), "TRAIN", 1);

    runner.inspect(&dataset).expect("first run");
    let second = runner.inspect(&dataset);
    assert!(matches!(second, Err(ZiError::DirectoryCreate { .. })));
}

#[test]
fn test_inspect_reads_compressed_shards_from_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let records_dir = temp.path().join("tfrecords");
    fs::create_dir(&records_dir).expect("records dir");
    write_shard(
        &records_dir.join("train-00000-of-00002.tfrecord.gz"),
        &[image_record(1, "gs://bucket/a.png", 3, 1, 1)],
    );
    write_shard(
        &records_dir.join("train-00001-of-00002.tfrecord.gz"),
        &[image_record(2, "gs://bucket/b.png", 3, 1, 1)],
    );

    let output = inspect(&records_dir, "TRAIN", 5, temp.path().join("out")).expect("inspect");

    assert!(output.starts_with(temp.path().join("out")));
    let name = output.file_name().expect("name").to_string_lossy().to_string();
    assert!(name.starts_with("check-tfrecords-"));
    assert_eq!(file_names(&output), vec!["a.png", "b.png", "data.csv"]);
    assert_eq!(read_csv(&output.join("data.csv")).len(), 3);
}
