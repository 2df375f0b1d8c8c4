use chrono::{NaiveTime, Timelike};

/// Compute the leave time for a shift: start + work hours + break minutes.
///
/// The sum is pure time-of-day arithmetic wrapping modulo 24h, so a shift
/// crossing midnight keeps only the time component (22:00 + 9h → 07:00).
/// Fractional work hours are allowed; the total is floored once to whole
/// minutes before being added.
///
/// Durations are expected to be non-negative; callers clamp or default
/// their configuration before getting here.
pub fn leave_time(start: NaiveTime, work_hours: f64, break_minutes: i64) -> NaiveTime {
    let total_minutes = (work_hours * 60.0 + break_minutes as f64).floor() as i64;

    let start_minutes = (start.hour() * 60 + start.minute()) as i64;
    let leave_minutes = (start_minutes + total_minutes).rem_euclid(24 * 60);

    // leave_minutes is already wrapped into [0, 1440)
    NaiveTime::from_hms_opt(leave_minutes as u32 / 60, leave_minutes as u32 % 60, 0).unwrap()
}
