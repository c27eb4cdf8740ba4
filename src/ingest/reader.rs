//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # TFRecord Reader
//!
//! Streams framed records out of TFRecord shards. Each frame is laid out as
//!
//! ```text
//! u64 LE  length
//! u32 LE  masked CRC32C of the 8 length bytes
//! [u8]    data (length bytes)
//! u32 LE  masked CRC32C of data
//! ```
//!
//! A clean end of file at a frame boundary ends a shard. A truncated frame or
//! a checksum mismatch is reported as [`ZiError::Record`]; no attempt is made
//! to resynchronize past a corrupt frame.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::ingest::example::decode_record;
use crate::ingest::format::ZiCompression;
use crate::record::ZiRecord;

const LENGTH_LEN: usize = 8;
const CRC_LEN: usize = 4;
const MASK_DELTA: u32 = 0xa282_ead8;

/// Configuration for reading shards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiReaderConfig {
    /// Shard compression; `Auto` infers it from each file's extension.
    pub compression: ZiCompression,
    /// Verify both frame checksums.
    pub verify_checksums: bool,
}

impl Default for ZiReaderConfig {
    fn default() -> Self {
        Self {
            compression: ZiCompression::Auto,
            verify_checksums: true,
        }
    }
}

/// CRC32C of `data`, masked the way TFRecord stores it.
pub fn masked_crc32c(data: &[u8]) -> u32 {
    let crc = crc32c::crc32c(data);
    (crc >> 15 | crc << 17).wrapping_add(MASK_DELTA)
}

/// Frames one serialized record the way TFRecord stores it.
pub fn frame_record(data: &[u8]) -> Vec<u8> {
    let length = (data.len() as u64).to_le_bytes();
    let mut frame = Vec::with_capacity(LENGTH_LEN + CRC_LEN * 2 + data.len());
    frame.extend_from_slice(&length);
    frame.extend_from_slice(&masked_crc32c(&length).to_le_bytes());
    frame.extend_from_slice(data);
    frame.extend_from_slice(&masked_crc32c(data).to_le_bytes());
    frame
}

/// Reads raw frames from one (already decompressed) byte stream.
pub struct ZiTfRecordReader<R: Read> {
    reader: R,
    source: String,
    verify_checksums: bool,
    frames_read: usize,
    exhausted: bool,
}

impl<R: Read> ZiTfRecordReader<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
            verify_checksums: true,
            frames_read: 0,
            exhausted: false,
        }
    }

    pub fn with_verify_checksums(mut self, verify: bool) -> Self {
        self.verify_checksums = verify;
        self
    }

    /// Reads the next frame's data, `None` at a clean end of stream.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut header = [0u8; LENGTH_LEN + CRC_LEN];
        if !self.read_exact_or_eof(&mut header)? {
            self.exhausted = true;
            return Ok(None);
        }

        let mut length_bytes = [0u8; LENGTH_LEN];
        length_bytes.copy_from_slice(&header[..LENGTH_LEN]);
        let length_crc = read_u32(&header[LENGTH_LEN..]);
        if self.verify_checksums && masked_crc32c(&length_bytes) != length_crc {
            return Err(self.corrupt("length checksum mismatch"));
        }

        let length = u64::from_le_bytes(length_bytes);
        let mut data = Vec::new();
        (&mut self.reader).take(length).read_to_end(&mut data)?;
        if (data.len() as u64) < length {
            return Err(self.corrupt(format!(
                "truncated data: expected {} bytes, found {}",
                length,
                data.len()
            )));
        }

        let mut footer = [0u8; CRC_LEN];
        if !self.read_exact_or_eof(&mut footer)? {
            return Err(self.corrupt("missing data checksum"));
        }
        if self.verify_checksums && masked_crc32c(&data) != read_u32(&footer) {
            return Err(self.corrupt("data checksum mismatch"));
        }

        self.frames_read += 1;
        Ok(Some(data))
    }

    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fills `buffer`; `false` on EOF before the first byte, error on EOF
    /// part way through.
    fn read_exact_or_eof(&mut self, buffer: &mut [u8]) -> Result<bool> {
        let mut offset = 0;
        while offset < buffer.len() {
            let read = self.reader.read(&mut buffer[offset..])?;
            if read == 0 {
                if offset == 0 {
                    return Ok(false);
                }
                return Err(self.corrupt("truncated frame header"));
            }
            offset += read;
        }
        Ok(true)
    }

    fn corrupt(&mut self, message: impl Into<String>) -> ZiError {
        self.exhausted = true;
        ZiError::record(
            self.source.clone(),
            format!("frame {}: {}", self.frames_read, message.into()),
        )
    }
}

impl<R: Read> Iterator for ZiTfRecordReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => None,
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; CRC_LEN];
    buf.copy_from_slice(&bytes[..CRC_LEN]);
    u32::from_le_bytes(buf)
}

pub type ZiShardReader = ZiTfRecordReader<Box<dyn Read + Send>>;

/// Opens one shard, decompressing as configured.
pub fn open_shard(path: &Path, config: &ZiReaderConfig) -> Result<ZiShardReader> {
    let file = File::open(path)?;
    let source = path.to_string_lossy().to_string();
    let stream = decompress(BufReader::new(file), config.compression.resolve(path), &source)?;
    Ok(ZiTfRecordReader::new(stream, source).with_verify_checksums(config.verify_checksums))
}

fn decompress(
    reader: BufReader<File>,
    compression: ZiCompression,
    source: &str,
) -> Result<Box<dyn Read + Send>> {
    match compression {
        ZiCompression::None | ZiCompression::Auto => Ok(Box::new(reader)),
        ZiCompression::Gzip | ZiCompression::Zlib => compressed(reader, compression, source),
    }
}

#[cfg(feature = "compression")]
fn compressed(
    reader: BufReader<File>,
    compression: ZiCompression,
    _source: &str,
) -> Result<Box<dyn Read + Send>> {
    match compression {
        ZiCompression::Zlib => Ok(Box::new(flate2::read::ZlibDecoder::new(reader))),
        _ => Ok(Box::new(flate2::read::MultiGzDecoder::new(reader))),
    }
}

#[cfg(not(feature = "compression"))]
fn compressed(
    _reader: BufReader<File>,
    compression: ZiCompression,
    source: &str,
) -> Result<Box<dyn Read + Send>> {
    Err(ZiError::validation(format!(
        "{:?} shard '{}' requires the 'compression' feature",
        compression, source
    )))
}

/// Lazily yields decoded records across a list of shards, in order.
///
/// Shards are opened only when the previous one is exhausted, so a bounded
/// take never touches more files than it needs.
pub struct ZiRecordIterator {
    shards: std::vec::IntoIter<PathBuf>,
    config: ZiReaderConfig,
    current: Option<ZiShardReader>,
    records_read: usize,
    failed: bool,
}

impl ZiRecordIterator {
    pub fn new(shards: Vec<PathBuf>, config: ZiReaderConfig) -> Self {
        Self {
            shards: shards.into_iter(),
            config,
            current: None,
            records_read: 0,
            failed: false,
        }
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn next_record(&mut self) -> Result<Option<ZiRecord>> {
        loop {
            if let Some(reader) = self.current.as_mut() {
                if let Some(frame) = reader.next_frame()? {
                    let record = decode_record(&frame, reader.source())?;
                    self.records_read += 1;
                    return Ok(Some(record));
                }
                log::debug!(
                    "Finished shard {} after {} records",
                    reader.source(),
                    reader.frames_read()
                );
                self.current = None;
            }

            match self.shards.next() {
                Some(path) => self.current = Some(open_shard(&path, &self.config)?),
                None => return Ok(None),
            }
        }
    }
}

impl Iterator for ZiRecordIterator {
    type Item = Result<ZiRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
