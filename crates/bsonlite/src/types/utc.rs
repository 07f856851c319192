// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! UTC timestamp: milliseconds since the Unix epoch.
//!
//! Stored as the 8-byte little-endian `Int64` encoding of the millisecond
//! count. The integer path is always used, so the count survives a round
//! trip through the buffer exactly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat};

use crate::error::{CodecError, CodecResult};
use crate::int64::encode_i64;
use crate::types::clock::{Clock, SystemClock};
use crate::types::ExtendedType;

/// Wire size of a timestamp.
pub const UTC_LEN: usize = 8;

/// Date-time layouts accepted besides RFC 3339; read as UTC.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utc {
    time: [u8; UTC_LEN],
}

impl Utc {
    /// Current system time.
    pub fn now() -> Self {
        Self::now_with(SystemClock)
    }

    /// Current time as reported by `clock`.
    pub fn now_with(clock: impl Clock) -> Self {
        let millis = clock.now_millis();
        log::trace!("[utc] stamped {} ms from clock", millis);
        Self::from_millis(millis)
    }

    pub fn from_millis(millis: i64) -> Self {
        Self {
            time: encode_i64(millis),
        }
    }

    /// Parse a date/time string.
    ///
    /// Accepts RFC 3339 (`2023-11-14T22:13:20.000Z`, any offset), an ISO
    /// date-time without offset (taken as UTC), or a bare `YYYY-MM-DD`
    /// (midnight UTC).
    pub fn parse(input: &str) -> CodecResult<Self> {
        parse_epoch_millis(input).map(Self::from_millis)
    }

    /// Replace the stored instant with the parsed `input`.
    ///
    /// On error the current value is kept.
    pub fn set_from_str(&mut self, input: &str) -> CodecResult<()> {
        *self = Self::parse(input)?;
        Ok(())
    }

    /// Milliseconds since the epoch.
    pub fn to_number(&self) -> i64 {
        i64::from_le_bytes(self.time)
    }

    /// `None` when the count lies outside chrono's representable range.
    pub fn to_date(&self) -> Option<DateTime<chrono::Utc>> {
        DateTime::from_timestamp_millis(self.to_number())
    }
}

impl Default for Utc {
    fn default() -> Self {
        Self::now()
    }
}

impl ExtendedType for Utc {
    const KIND: &'static str = "utc";

    fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let time: [u8; UTC_LEN] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: UTC_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self { time })
    }

    fn buffer(&self) -> &[u8] {
        &self.time
    }
}

impl From<DateTime<chrono::Utc>> for Utc {
    fn from(date: DateTime<chrono::Utc>) -> Self {
        Self::from_millis(date.timestamp_millis())
    }
}

impl FromStr for Utc {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// RFC 3339 with millisecond precision, or the raw count when out of range.
impl fmt::Display for Utc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date() {
            Some(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.to_number()),
        }
    }
}

fn parse_epoch_millis(input: &str) -> CodecResult<i64> {
    let trimmed = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.timestamp_millis());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().timestamp_millis());
    }

    log::debug!("[utc] unparseable date {:?}", input);
    Err(CodecError::InvalidDate {
        input: input.to_string(),
    })
}
