use crate::models::hhmm;
use chrono::NaiveTime;
use serde::Serialize;

/// One row of the candidate picker: a start time and the leave time it
/// would produce under the current work/break preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartOption {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub leave_time: NaiveTime,
    pub work_hours: f64,
    pub break_minutes: i64,
}

impl StartOption {
    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn leave_str(&self) -> String {
        self.leave_time.format("%H:%M").to_string()
    }
}
