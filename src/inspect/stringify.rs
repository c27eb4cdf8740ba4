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

//! Canonical text form of field values for the CSV sink.

use crate::record::ZiFieldValue;

/// Converts one field value into its canonical text form.
///
/// Byte strings are decoded as UTF-8 (invalid sequences become U+FFFD),
/// integers use their decimal form, floats keep a decimal point (`4.0`)
/// and lists render space separated inside brackets (`[1 2 3]`).
pub fn stringify(value: &ZiFieldValue) -> String {
    match value {
        ZiFieldValue::Int(v) => v.to_string(),
        ZiFieldValue::Float(v) => float_text(*v),
        ZiFieldValue::Bytes(v) => bytes_text(v),
        ZiFieldValue::IntList(values) => bracketed(values.iter().map(|v| v.to_string())),
        ZiFieldValue::FloatList(values) => bracketed(values.iter().map(|v| float_text(*v))),
        ZiFieldValue::BytesList(values) => bracketed(values.iter().map(|v| bytes_text(v))),
    }
}

fn float_text(value: f32) -> String {
    format!("{:?}", value)
}

fn bytes_text(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

fn bracketed<I: Iterator<Item = String>>(items: I) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(" "))
}
