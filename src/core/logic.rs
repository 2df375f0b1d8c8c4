use crate::core::calculator::{leave, remaining};
use crate::models::leave_status::LeaveStatus;
use chrono::{NaiveDateTime, NaiveTime};

pub struct Core;

impl Core {
    /// Build the full status for a committed start time: the computed leave
    /// time plus the countdown against `now`.
    pub fn build_status(
        start: NaiveTime,
        work_hours: f64,
        break_minutes: i64,
        now: NaiveDateTime,
    ) -> LeaveStatus {
        let leave_time = leave::leave_time(start, work_hours, break_minutes);
        let remaining = remaining::remaining_until(leave_time, Some(start), now);

        LeaveStatus {
            leave_time,
            remaining,
        }
    }
}
