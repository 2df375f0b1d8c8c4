//! Formatting utilities used for CLI outputs.

use crate::core::calculator::remaining::Remaining;

/// Render a remaining/overtime delta as a compact clock value.
/// es: 02:25 ahead, or -01:10 once the leave time is behind us.
pub fn delta2readable(r: &Remaining, short: bool) -> String {
    let sign = if r.is_past { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, r.hours, r.minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, r.hours, r.minutes)
    }
}
