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

//! Protobuf messages for `tf.train.Example` and their conversion to records.
//!
//! `Features.feature` is a `map<string, Feature>` in the upstream schema. On
//! the wire a map is a repeated entry message, so it is declared here as
//! `repeated FeatureEntry` to keep the order in which fields were written.

use prost::Message;

use crate::errors::{Result, ZiError};
use crate::record::{ZiFieldValue, ZiRecord};

#[derive(Clone, PartialEq, Message)]
pub struct Example {
    #[prost(message, optional, tag = "1")]
    pub features: Option<Features>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Features {
    #[prost(message, repeated, tag = "1")]
    pub feature: Vec<FeatureEntry>,
}

/// One `map<string, Feature>` entry.
#[derive(Clone, PartialEq, Message)]
pub struct FeatureEntry {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Feature>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Feature {
    #[prost(oneof = "feature::Kind", tags = "1, 2, 3")]
    pub kind: Option<feature::Kind>,
}

pub mod feature {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "1")]
        BytesList(super::BytesList),
        #[prost(message, tag = "2")]
        FloatList(super::FloatList),
        #[prost(message, tag = "3")]
        Int64List(super::Int64List),
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct BytesList {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub value: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FloatList {
    #[prost(float, repeated, tag = "1")]
    pub value: Vec<f32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Int64List {
    #[prost(int64, repeated, tag = "1")]
    pub value: Vec<i64>,
}

impl Feature {
    pub fn bytes(values: Vec<Vec<u8>>) -> Self {
        Self {
            kind: Some(feature::Kind::BytesList(BytesList { value: values })),
        }
    }

    pub fn floats(values: Vec<f32>) -> Self {
        Self {
            kind: Some(feature::Kind::FloatList(FloatList { value: values })),
        }
    }

    pub fn ints(values: Vec<i64>) -> Self {
        Self {
            kind: Some(feature::Kind::Int64List(Int64List { value: values })),
        }
    }

    fn into_value(self) -> ZiFieldValue {
        match self.kind {
            Some(feature::Kind::BytesList(list)) => ZiFieldValue::from_byte_strings(list.value),
            Some(feature::Kind::FloatList(list)) => ZiFieldValue::from_floats(list.value),
            Some(feature::Kind::Int64List(list)) => ZiFieldValue::from_ints(list.value),
            None => ZiFieldValue::BytesList(Vec::new()),
        }
    }
}

impl From<&ZiFieldValue> for Feature {
    fn from(value: &ZiFieldValue) -> Self {
        match value {
            ZiFieldValue::Int(v) => Feature::ints(vec![*v]),
            ZiFieldValue::Float(v) => Feature::floats(vec![*v]),
            ZiFieldValue::Bytes(v) => Feature::bytes(vec![v.clone()]),
            ZiFieldValue::IntList(v) => Feature::ints(v.clone()),
            ZiFieldValue::FloatList(v) => Feature::floats(v.clone()),
            ZiFieldValue::BytesList(v) => Feature::bytes(v.clone()),
        }
    }
}

impl Example {
    /// Converts the example into an ordered record.
    pub fn into_record(self) -> ZiRecord {
        self.features
            .map(|features| features.feature)
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                let value = entry.value.unwrap_or_default().into_value();
                (entry.key, value)
            })
            .collect()
    }
}

impl From<&ZiRecord> for Example {
    fn from(record: &ZiRecord) -> Self {
        let feature = record
            .iter()
            .map(|(key, value)| FeatureEntry {
                key: key.to_string(),
                value: Some(Feature::from(value)),
            })
            .collect();
        Example {
            features: Some(Features { feature }),
        }
    }
}

/// Decodes one serialized Example read from `source`.
pub fn decode_record(bytes: &[u8], source: &str) -> Result<ZiRecord> {
    let example = Example::decode(bytes)
        .map_err(|e| ZiError::record(source, format!("malformed Example: {}", e)))?;
    Ok(example.into_record())
}
