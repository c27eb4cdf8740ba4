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

use zi_inspect::{stringify, ZiError, ZiFieldValue, ZiHeader, ZiRecord};

fn sample() -> ZiRecord {
    ZiRecord::new()
        .with_field("id", 7i64)
        .with_field("image_name", "images/a.png")
        .with_field("image", b"AAAA".to_vec())
        .with_field("score", 0.5f32)
}

#[test]
fn test_record_keeps_insertion_order() {
    let record = sample();
    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["id", "image_name", "image", "score"]);
}

#[test]
fn test_insert_replaces_in_place() {
    let mut record = sample();
    record.insert("id", 8i64);
    assert_eq!(record.len(), 4);
    assert_eq!(record.get("id").and_then(ZiFieldValue::as_int), Some(8));
    assert_eq!(record.field_names().next(), Some("id"));
}

#[test]
fn test_header_excludes_image_payload() {
    let header = ZiHeader::from_record(&sample(), "image");
    assert_eq!(header.fields(), &["id", "image_name", "score"]);
    assert!(!header.contains("image"));
}

#[test]
fn test_header_projects_in_header_order() {
    let header = ZiHeader::from_record(&sample(), "image");
    let reordered = ZiRecord::new()
        .with_field("score", 1.5f32)
        .with_field("image_name", "b.png")
        .with_field("id", 9i64)
        .with_field("extra", 3i64);

    let row: Vec<String> = header
        .project(&reordered, 4)
        .expect("projection")
        .into_iter()
        .map(stringify)
        .collect();
    assert_eq!(row, vec!["9", "b.png", "1.5"]);
}

#[test]
fn test_projection_reports_missing_field_and_index() {
    let header = ZiHeader::from_record(&sample(), "image");
    let partial = ZiRecord::new().with_field("id", 1i64);

    match header.project(&partial, 3) {
        Err(ZiError::FieldMissing { field, record }) => {
            assert_eq!(field, "image_name");
            assert_eq!(record, 3);
        }
        other => panic!("expected FieldMissing, got {:?}", other),
    }
}

#[test]
fn test_stringify_renders_cells() {
    assert_eq!(stringify(&ZiFieldValue::Int(-3)), "-3");
    assert_eq!(stringify(&ZiFieldValue::Float(2.0)), "2.0");
    assert_eq!(stringify(&ZiFieldValue::from("caf\u{e9}")), "caf\u{e9}");
    assert_eq!(stringify(&ZiFieldValue::IntList(vec![1, 2, 3])), "[1 2 3]");
}

#[test]
fn test_record_serializes_with_serde_json() {
    let record = ZiRecord::new().with_field("id", 1i64);
    let json = serde_json::to_string(&record).expect("serialize");
    let back: ZiRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, record);
}
