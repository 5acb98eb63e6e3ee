//! RFC 3339 timestamp parsing.
//!
//! Every rejection is reported as [`ParseFailure`]; nothing here panics or
//! logs.

use chrono::DateTime;

use crate::domain::model::TimePair;
use crate::utils::error::ParseFailure;

/// Parses an RFC 3339 timestamp into milliseconds since the Unix epoch.
///
/// Numeric offsets are applied, so `2024-01-01T01:00:00+01:00` and
/// `2024-01-01T00:00:00Z` yield the same value. Fraction digits past the
/// millisecond are floored. Pre-epoch instants are negative.
pub fn rfc3339_to_system_time_in_milliseconds(timestamp: &str) -> Result<i64, ParseFailure> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| ParseFailure)
}

/// Parses an RFC 3339 timestamp into a millisecond-resolution [`TimePair`].
pub fn rfc3339_to_system_time(timestamp: &str) -> Result<TimePair, ParseFailure> {
    rfc3339_to_system_time_in_milliseconds(timestamp).map(TimePair::from_millis)
}
