use crate::core::calculator::leave;
use crate::models::start_option::StartOption;
use chrono::NaiveTime;

/// Start hours offered by the picker, paired with every quarter of the hour.
const START_HOURS: [u32; 7] = [7, 8, 9, 10, 11, 12, 13];
const QUARTERS: [u32; 4] = [0, 15, 30, 45];

/// Generate the fixed grid of candidate start times (07:00 .. 13:45, every
/// 15 minutes → 28 entries in ascending order), each paired with the leave
/// time it would produce.
pub fn candidate_start_times(work_hours: f64, break_minutes: i64) -> Vec<StartOption> {
    START_HOURS
        .iter()
        .flat_map(|&hour| {
            QUARTERS.map(|minute| {
                let start_time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
                StartOption {
                    start_time,
                    leave_time: leave::leave_time(start_time, work_hours, break_minutes),
                    work_hours,
                    break_minutes,
                }
            })
        })
        .collect()
}
