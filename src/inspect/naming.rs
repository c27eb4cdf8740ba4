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

//! # Output Naming
//!
//! Timestamp-based names for per-run output directories.
//!
//! Names have the form `<prefix>-YYYYMMDD-HHMMSS` in local time. They are
//! fixed width and sort lexicographically in time order. Two runs started
//! within the same second produce the same name; nothing here disambiguates
//! them.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// `strftime` pattern for second-resolution, zero-padded timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Wall-clock source for output names.
pub trait ZiClock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiSystemClock;

impl ZiClock for ZiSystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct ZiFixedClock {
    instant: DateTime<Local>,
}

impl ZiFixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Builds a clock pinned to a naive local date-time.
    ///
    /// Returns `None` when the local time does not exist (DST gaps).
    pub fn from_naive(naive: NaiveDateTime) -> Option<Self> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(Self::new)
    }
}

impl ZiClock for ZiFixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

/// Derives output directory names from a clock.
#[derive(Clone)]
pub struct ZiOutputNamer {
    clock: Arc<dyn ZiClock>,
}

impl std::fmt::Debug for ZiOutputNamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiOutputNamer").finish_non_exhaustive()
    }
}

impl Default for ZiOutputNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiOutputNamer {
    /// Creates a namer backed by the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(ZiSystemClock),
        }
    }

    pub fn with_clock(clock: Arc<dyn ZiClock>) -> Self {
        Self { clock }
    }

    /// Current time as `YYYYMMDD-HHMMSS`.
    pub fn timestamp(&self) -> String {
        self.clock.now().format(TIMESTAMP_FORMAT).to_string()
    }

    /// `<prefix>-<timestamp>`.
    pub fn name(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.timestamp())
    }
}

/// Current local time as `YYYYMMDD-HHMMSS`.
pub fn get_timestamp() -> String {
    ZiOutputNamer::new().timestamp()
}
