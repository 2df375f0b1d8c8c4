use crate::core::calculator::remaining::Remaining;
use crate::models::hhmm;
use chrono::NaiveTime;
use serde::Serialize;

/// Computed status for today's shift: when to leave, and how far `now` is
/// from that instant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeaveStatus {
    #[serde(with = "hhmm")]
    pub leave_time: NaiveTime,
    pub remaining: Remaining,
}

impl LeaveStatus {
    pub fn leave_str(&self) -> String {
        self.leave_time.format("%H:%M").to_string()
    }
}
