/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Countdown color:
/// still ahead → green
/// already past (overtime) → red
pub fn color_for_countdown(is_past: bool) -> &'static str {
    if is_past { RED } else { GREEN }
}
