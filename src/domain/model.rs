use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const NANOS_PER_MILLI: u32 = 1_000_000;

/// An instant as whole seconds since the Unix epoch plus a nanosecond
/// remainder in `[0, 999_999_999]`.
///
/// Pre-epoch instants keep a non-negative remainder: one millisecond before
/// the epoch is `(-1, 999_000_000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimePair {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl TimePair {
    pub fn from_millis(millis: i64) -> Self {
        let seconds = millis.div_euclid(MILLIS_PER_SECOND);
        // rem_euclid keeps the remainder in 0..1000, so the cast is lossless
        let remainder = millis.rem_euclid(MILLIS_PER_SECOND) as u32;
        Self {
            seconds,
            nanoseconds: remainder * NANOS_PER_MILLI,
        }
    }

    /// Sub-millisecond nanoseconds are truncated. `None` when the instant
    /// does not fit in `i64` milliseconds.
    pub fn as_millis(&self) -> Option<i64> {
        // seconds * 1000 alone can underflow while the sum still fits
        let millis = i128::from(self.seconds) * i128::from(MILLIS_PER_SECOND)
            + i128::from(self.nanoseconds / NANOS_PER_MILLI);
        i64::try_from(millis).ok()
    }

    /// RFC 3339 with millisecond precision and a `Z` suffix, or `None` when
    /// the instant falls outside the supported calendar range.
    pub fn to_rfc3339(&self) -> Option<String> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<TimePair> for (i64, u32) {
    fn from(pair: TimePair) -> Self {
        (pair.seconds, pair.nanoseconds)
    }
}
