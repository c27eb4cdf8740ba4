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

use std::fs;

use zi_inspect::{ZiError, ZiIO, LOGFILE};

#[test]
fn test_create_fresh_dir_creates_ancestors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("a").join("b").join("run");

    ZiIO::create_fresh_dir(&target).expect("create");
    assert!(target.is_dir());
}

#[test]
fn test_create_fresh_dir_rejects_existing_leaf() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("run");
    fs::create_dir(&target).expect("pre-create");

    let result = ZiIO::create_fresh_dir(&target);
    assert!(matches!(result, Err(ZiError::DirectoryCreate { .. })));
}

#[test]
fn test_create_fresh_dir_fails_under_a_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, b"x").expect("write");

    let result = ZiIO::create_fresh_dir(&blocker.join("run"));
    assert!(matches!(result, Err(ZiError::DirectoryCreate { .. })));
}

#[test]
fn test_copy_logfile_copies_contents() {
    let temp = tempfile::tempdir().expect("tempdir");
    let logfile = temp.path().join("run.log");
    fs::write(&logfile, "converted 10 rows\n").expect("write log");
    let output_dir = temp.path().join("out");

    let destination = ZiIO::copy_logfile(&logfile, &output_dir).expect("copy");

    assert_eq!(destination, output_dir.join(LOGFILE));
    assert_eq!(
        fs::read_to_string(&destination).expect("read"),
        "converted 10 rows\n"
    );
}

#[test]
fn test_copy_logfile_reports_missing_source() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("missing.log");

    match ZiIO::copy_logfile(&missing, temp.path()) {
        Err(ZiError::Io(message)) => {
            assert!(message.contains("missing.log"));
            assert!(message.contains("not found"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}
