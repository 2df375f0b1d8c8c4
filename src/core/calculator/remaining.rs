use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Countdown (or overtime) between `now` and the leave time, as an absolute
/// magnitude plus a past/future flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub is_past: bool,
}

/// Compute how long until (or since) the leave time.
///
/// `leave` and `start` are bare times-of-day; `now` carries the date. The
/// leave time is anchored onto now's calendar date. For an overnight shift
/// (`leave < start`, strict, so a 24h-exact shift does not count) the
/// anchored leave moves one day forward only while `now >= start` as
/// anchored today: before midnight the leave instant still belongs to
/// tomorrow. Once the clock has rolled past midnight (`now < start`),
/// today's anchoring already names the leave's own calendar day. That holds
/// on the morning after the leave time too, where the result is a short
/// overtime rather than a ~23h countdown.
///
/// Without a start time no overnight correction is applied; the leave time
/// is compared on today's anchoring only. That is the reduced mode used for
/// "what if I started at X" projections with no committed start.
pub fn remaining_until(
    leave: NaiveTime,
    start: Option<NaiveTime>,
    now: NaiveDateTime,
) -> Remaining {
    let today = now.date();
    let mut leave_at = today.and_time(leave);

    if let Some(start) = start
        && leave < start
        && now >= today.and_time(start)
    {
        leave_at = leave_at + Duration::days(1);
    }

    let delta = leave_at - now;
    let is_past = delta < Duration::zero();

    let secs = delta.num_seconds().abs();
    Remaining {
        hours: secs / 3600,
        minutes: (secs % 3600) / 60,
        is_past,
    }
}
