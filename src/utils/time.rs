//! Time utilities: parsing HH:MM, formatting times, zero-padding raw fields.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse a wall-clock time written as `H:MM` or `HH:MM`.
///
/// This is the validation gate for free-text input: anything not matching
/// `\d{1,2}:\d{2}`, or with an out-of-range hour/minute, yields `None`.
/// A single minute digit (`"9:5"`) is rejected on purpose.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let re = regex::Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
    let caps = re.captures(t)?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Canonical `HH:MM` rendering of a time-of-day.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Zero-pad raw hour/minute fields to `HH:MM`.
/// Out-of-range values are not rejected, only padded as given.
pub fn format_hm(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
