use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Parses a loosely delimited date/time string into a UTC instant.
///
/// The input must carry seven numeric runs separated by one or more
/// non-digit characters, in order: year, month (1-based), day, hour,
/// minute, second, millisecond. `"2021-05-03T10:15:30.500"` is the
/// canonical shape, but any non-digit separators work.
///
/// Malformed input is not an error. Fewer than seven runs, or components
/// that do not form a real calendar instant, come back as `None` and the
/// caller decides what to do with that.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let separators = Regex::new(r"\D+").unwrap();
    let runs: Vec<&str> = separators.split(input).collect();

    if runs.len() < 7 {
        return None;
    }

    let year: i32 = runs[0].parse().ok()?;
    let month: u32 = runs[1].parse().ok()?;
    let day: u32 = runs[2].parse().ok()?;
    let hour: u32 = runs[3].parse().ok()?;
    let minute: u32 = runs[4].parse().ok()?;
    let second: u32 = runs[5].parse().ok()?;
    let millisecond: u32 = runs[6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let naive = date.and_hms_milli_opt(hour, minute, second, millisecond)?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}
