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

//! # Zi Domain Module
//!
//! Domain-specific payload types carried inside dataset records. Only the
//! image domain is needed for inspection: records may embed a raw pixel
//! buffer that is materialized back into an image file.

pub mod image;

pub use image::{encode_pixels, ZiColorSpace, ZiImageEncoding, ZiImagePayload, ZiImageSchema};
