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

//! # Image Domain Module
//!
//! This module turns image payloads stored inside dataset records back into
//! image files. The conversion pipeline stores each image as URL-safe base64
//! of its raw, row-major pixel bytes next to three integer geometry fields.
//!
//! ## Image Encoding Parameters
//!
//! - **Dimensions**: Width and height in pixels
//! - **Color Space**: Derived from the channel count (1 → Grayscale,
//!   2 → Grayscale + alpha, 3 → RGB, 4 → RGBA), 8 bits per component
//!
//! ## Reserved Field Names
//!
//! Which record fields carry the payload, its file name and its geometry is
//! declared once in [`ZiImageSchema`]; orchestration code never spells the
//! field names itself.
//!
//! ## Usage Example
//!
//! ```rust
//! use zi_inspect::domain::image::{encode_pixels, ZiImagePayload, ZiImageSchema};
//! use zi_inspect::ZiRecord;
//!
//! let record = ZiRecord::new()
//!     .with_field("image", encode_pixels(&[0u8; 2 * 2 * 3]))
//!     .with_field("image_width", 2i64)
//!     .with_field("image_height", 2i64)
//!     .with_field("image_channels", 3i64);
//!
//! let schema = ZiImageSchema::default();
//! let payload = ZiImagePayload::from_record(&record, &schema, 0)?;
//! payload.save(std::path::Path::new("output/a.png"))?;
//! ```

use std::path::Path;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use image::{DynamicImage, ImageBuffer};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::record::{ZiFieldValue, ZiRecord};

/// URL-safe alphabet, padding optional on decode.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reserved record field names for image data.
///
/// The payload field is excluded from the CSV header; the name field
/// triggers image materialization and names the output file; the geometry
/// fields describe the raw pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiImageSchema {
    /// Field holding the base64 pixel payload.
    pub image: String,
    /// Field holding the original image path or file name.
    pub name: String,
    pub width: String,
    pub height: String,
    pub channels: String,
}

impl Default for ZiImageSchema {
    fn default() -> Self {
        Self {
            image: "image".to_string(),
            name: "image_name".to_string(),
            width: "image_width".to_string(),
            height: "image_height".to_string(),
            channels: "image_channels".to_string(),
        }
    }
}

/// Color space models supported for raw pixel payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ZiColorSpace {
    Grayscale,
    GrayscaleAlpha,
    RGB,
    RGBA,
}

impl ZiColorSpace {
    /// Maps a channel count to its color space.
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(ZiColorSpace::Grayscale),
            2 => Ok(ZiColorSpace::GrayscaleAlpha),
            3 => Ok(ZiColorSpace::RGB),
            4 => Ok(ZiColorSpace::RGBA),
            other => Err(ZiError::image(format!(
                "unsupported channel count {}",
                other
            ))),
        }
    }

    pub fn channels(&self) -> u32 {
        match self {
            ZiColorSpace::Grayscale => 1,
            ZiColorSpace::GrayscaleAlpha => 2,
            ZiColorSpace::RGB => 3,
            ZiColorSpace::RGBA => 4,
        }
    }
}

/// Geometry of a raw 8-bit pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ZiImageEncoding {
    pub width: u32,
    pub height: u32,
    pub color_space: ZiColorSpace,
}

impl ZiImageEncoding {
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        Ok(Self {
            width,
            height,
            color_space: ZiColorSpace::from_channels(channels)?,
        })
    }

    /// Total number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of bytes the raw buffer must hold.
    pub fn expected_len(&self) -> u64 {
        self.pixel_count() * self.color_space.channels() as u64
    }
}

/// Base64 pixel payload plus its geometry, as stored in a record.
#[derive(Debug, Clone)]
pub struct ZiImagePayload {
    pub data: Vec<u8>,
    pub encoding: ZiImageEncoding,
}

impl ZiImagePayload {
    pub fn new(data: Vec<u8>, encoding: ZiImageEncoding) -> Self {
        Self { data, encoding }
    }

    /// Extracts the payload and geometry fields named by `schema`.
    ///
    /// Missing fields fail with [`ZiError::FieldMissing`] for sample `index`;
    /// fields of the wrong type fail with [`ZiError::ImageDecode`].
    pub fn from_record(record: &ZiRecord, schema: &ZiImageSchema, index: usize) -> Result<Self> {
        let data = match record.require(&schema.image, index)? {
            ZiFieldValue::Bytes(bytes) => bytes.clone(),
            other => {
                return Err(ZiError::image(format!(
                    "field '{}' must be bytes, found {}",
                    schema.image,
                    other.type_name()
                )))
            }
        };
        let width = dimension(record, &schema.width, index)?;
        let height = dimension(record, &schema.height, index)?;
        let channels = dimension(record, &schema.channels, index)?;
        Ok(Self::new(data, ZiImageEncoding::new(width, height, channels)?))
    }

    /// Decodes the base64 payload into an image sized per the encoding.
    pub fn decode(&self) -> Result<DynamicImage> {
        let pixels = PAYLOAD_ENGINE
            .decode(&self.data)
            .map_err(|e| ZiError::image(format!("invalid base64 payload: {}", e)))?;

        let expected = self.encoding.expected_len();
        if pixels.len() as u64 != expected {
            return Err(ZiError::image(format!(
                "payload holds {} bytes but {}x{}x{} needs {}",
                pixels.len(),
                self.encoding.width,
                self.encoding.height,
                self.encoding.color_space.channels(),
                expected
            )));
        }

        let (w, h) = (self.encoding.width, self.encoding.height);
        let image = match self.encoding.color_space {
            ZiColorSpace::Grayscale => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageLuma8),
            ZiColorSpace::GrayscaleAlpha => {
                ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageLumaA8)
            }
            ZiColorSpace::RGB => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageRgb8),
            ZiColorSpace::RGBA => ImageBuffer::from_raw(w, h, pixels).map(DynamicImage::ImageRgba8),
        };
        image.ok_or_else(|| ZiError::image("pixel buffer does not match image geometry"))
    }

    /// Decodes the payload and writes it to `path`, creating or overwriting
    /// exactly one file. The file format follows the path's extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let image = self.decode()?;
        image.save(path)?;
        log::debug!(
            "Saved {}x{} image to {}",
            self.encoding.width,
            self.encoding.height,
            path.display()
        );
        Ok(())
    }
}

fn dimension(record: &ZiRecord, field: &str, index: usize) -> Result<u32> {
    let value = record.require(field, index)?;
    let raw = value.as_int().ok_or_else(|| {
        ZiError::image(format!(
            "field '{}' must be an int64 scalar, found {}",
            field,
            value.type_name()
        ))
    })?;
    u32::try_from(raw)
        .map_err(|_| ZiError::image(format!("field '{}' out of range: {}", field, raw)))
}

/// Encodes raw pixels the way the conversion pipeline stores them.
pub fn encode_pixels(pixels: &[u8]) -> Vec<u8> {
    PAYLOAD_ENGINE.encode(pixels).into_bytes()
}
