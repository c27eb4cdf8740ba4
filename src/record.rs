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

//! # Zi Record Module
//!
//! This module provides the data structures for one decoded dataset sample.
//! A ZiRecord is an ordered bag of named, typed fields whose shape is
//! discovered from the data rather than declared up front.
//!
//! ## Design Principles
//!
//! - **Ordered**: Fields keep the order in which they were decoded, so the
//!   CSV columns follow the dataset's own field order
//! - **Typed**: Values are integers, floats or byte strings (scalar or list),
//!   mirroring the three TFRecord feature kinds
//! - **Resolved once**: A [`ZiHeader`] is derived from the first record of a
//!   run and every later record is validated against it
//!
//! ## Usage Example
//!
//! ```rust
//! use zi_inspect::record::{ZiHeader, ZiRecord};
//!
//! let record = ZiRecord::new()
//!     .with_field("id", 1i64)
//!     .with_field("image_name", "a.png")
//!     .with_field("image", b"AAAA".to_vec());
//!
//! let header = ZiHeader::from_record(&record, "image");
//! assert_eq!(header.fields(), ["id", "image_name"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// One typed field value.
///
/// A TFRecord feature holding exactly one element decodes to a scalar
/// variant; zero or several elements decode to the matching list variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiFieldValue {
    Int(i64),
    Float(f32),
    Bytes(Vec<u8>),
    IntList(Vec<i64>),
    FloatList(Vec<f32>),
    BytesList(Vec<Vec<u8>>),
}

impl ZiFieldValue {
    /// Returns the integer when the value is an integer scalar.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ZiFieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the bytes when the value is a byte-string scalar.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ZiFieldValue::Bytes(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ZiFieldValue::Int(_) | ZiFieldValue::Float(_) | ZiFieldValue::Bytes(_)
        )
    }

    /// Short type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ZiFieldValue::Int(_) => "int64",
            ZiFieldValue::Float(_) => "float",
            ZiFieldValue::Bytes(_) => "bytes",
            ZiFieldValue::IntList(_) => "int64_list",
            ZiFieldValue::FloatList(_) => "float_list",
            ZiFieldValue::BytesList(_) => "bytes_list",
        }
    }

    pub(crate) fn from_ints(mut values: Vec<i64>) -> Self {
        if values.len() == 1 {
            ZiFieldValue::Int(values.remove(0))
        } else {
            ZiFieldValue::IntList(values)
        }
    }

    pub(crate) fn from_floats(mut values: Vec<f32>) -> Self {
        if values.len() == 1 {
            ZiFieldValue::Float(values.remove(0))
        } else {
            ZiFieldValue::FloatList(values)
        }
    }

    pub(crate) fn from_byte_strings(mut values: Vec<Vec<u8>>) -> Self {
        if values.len() == 1 {
            ZiFieldValue::Bytes(values.remove(0))
        } else {
            ZiFieldValue::BytesList(values)
        }
    }
}

impl From<i64> for ZiFieldValue {
    fn from(value: i64) -> Self {
        ZiFieldValue::Int(value)
    }
}

impl From<f32> for ZiFieldValue {
    fn from(value: f32) -> Self {
        ZiFieldValue::Float(value)
    }
}

impl From<Vec<u8>> for ZiFieldValue {
    fn from(value: Vec<u8>) -> Self {
        ZiFieldValue::Bytes(value)
    }
}

impl From<&str> for ZiFieldValue {
    fn from(value: &str) -> Self {
        ZiFieldValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for ZiFieldValue {
    fn from(value: String) -> Self {
        ZiFieldValue::Bytes(value.into_bytes())
    }
}

/// One decoded sample: an ordered mapping from field name to value.
///
/// Field names are unique; inserting an existing name replaces the value in
/// place and keeps the original position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiRecord {
    fields: Vec<(String, ZiFieldValue)>,
}

impl ZiRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style insert.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<ZiFieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ZiFieldValue>,
    ) -> Option<ZiFieldValue> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ZiFieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Looks up a field that must be present, `record` being the sample index
    /// reported on failure.
    pub fn require(&self, name: &str, record: usize) -> Result<&ZiFieldValue> {
        self.get(name)
            .ok_or_else(|| ZiError::field_missing(name, record))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in decode order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZiFieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<ZiFieldValue>> FromIterator<(K, V)> for ZiRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = ZiRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// Ordered CSV column names for one export run.
///
/// Derived exactly once from the first sampled record, minus the reserved
/// image payload field. Later records are projected through it; a header
/// field absent from a later record is a [`ZiError::FieldMissing`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiHeader {
    fields: Vec<String>,
}

impl ZiHeader {
    /// Derives the header from `record`, dropping the `excluded` field.
    pub fn from_record(record: &ZiRecord, excluded: &str) -> Self {
        Self {
            fields: record
                .field_names()
                .filter(|name| *name != excluded)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    /// Values of `record` in header order.
    pub fn project<'a>(&self, record: &'a ZiRecord, index: usize) -> Result<Vec<&'a ZiFieldValue>> {
        self.fields
            .iter()
            .map(|field| record.require(field, index))
            .collect()
    }
}
