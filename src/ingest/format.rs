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

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Compression applied to a TFRecord shard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiCompression {
    /// Infer from the file extension.
    #[default]
    Auto,
    None,
    Gzip,
    Zlib,
}

impl ZiCompression {
    /// Resolves `Auto` against a shard path; explicit choices are kept.
    pub fn resolve(self, path: &Path) -> ZiCompression {
        match self {
            ZiCompression::Auto => detect_from_path(path),
            explicit => explicit,
        }
    }
}

/// Infers shard compression from its extension.
///
/// `.gz` is GZIP, `.zz` and `.zlib` are ZLIB, anything else is read raw.
pub fn detect_from_path(path: &Path) -> ZiCompression {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "gz" | "gzip" => ZiCompression::Gzip,
        "zz" | "zlib" => ZiCompression::Zlib,
        _ => ZiCompression::None,
    }
}
