use crate::core::datetime::parse_timestamp;
use chrono::{DateTime, Utc};

/// Whether a raw show timestamp lies strictly after `now`.
///
/// The venue page splits shows into past and upcoming the same way.
/// A string the parser cannot read counts as not upcoming, so a garbled
/// attribute never holds a venue back.
pub fn is_upcoming(raw: &str, now: DateTime<Utc>) -> bool {
    parse_timestamp(raw).map(|start| start > now).unwrap_or(false)
}
