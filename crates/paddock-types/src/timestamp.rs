//! Wire timestamp.
//!
//! A [`Timestamp`] is a point in time expressed as whole seconds plus
//! nanoseconds since the Unix epoch, restricted to the years 0001..=9999.
//! On the wire it is an RFC 3339 string in UTC (`2026-10-16T09:30:00Z`).
//!
//! Store times are [`chrono::DateTime<Utc>`], whose range is much wider, so
//! converting into a `Timestamp` is fallible.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// `0001-01-01T00:00:00Z`
const MIN_SECONDS: i64 = -62_135_596_800;
/// `9999-12-31T23:59:59Z`
const MAX_SECONDS: i64 = 253_402_300_799;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp {seconds}s is outside 0001-01-01..=9999-12-31")]
    OutOfRange { seconds: i64 },

    #[error("invalid RFC 3339 timestamp '{raw}': {reason}")]
    Parse { raw: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        // Construction guarantees the range, so this never falls back.
        DateTime::from_timestamp(self.seconds, self.nanos as u32).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Parse an RFC 3339 string (any offset) into a `Timestamp`.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let parsed = DateTime::parse_from_rfc3339(raw).map_err(|e| TimestampError::Parse {
            raw: raw.to_owned(),
            reason: e.to_string(),
        })?;
        Self::try_from(parsed.with_timezone(&Utc))
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        let seconds = value.timestamp();
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(TimestampError::OutOfRange { seconds });
        }
        // Leap-second representations carry nanos >= 1e9; fold them down.
        let nanos = (value.timestamp_subsec_nanos() % 1_000_000_000) as i32;
        Ok(Self { seconds, nanos })
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.to_datetime()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_datetime().to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
