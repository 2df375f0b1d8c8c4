//! Localized strings for the CLI surface.
//!
//! A pure lookup table keyed by language tag. The core only ever produces
//! canonical `HH:MM` strings and numeric deltas; everything human-readable
//! is assembled here.

use crate::core::calculator::remaining::Remaining;
use crate::errors::{AppError, AppResult};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ja,
    En,
}

/// Fixed strings of one locale.
pub struct Strings {
    pub today_section: &'static str,
    pub pick_section: &'static str,
    pub start_header: &'static str,
    pub leave_header: &'static str,
    pub no_start_time: &'static str,
    pub start_recorded: &'static str,
    pub start_cleared: &'static str,
    pub leave_label: &'static str,
    pub confirm_reset: &'static str,
    pub aborted: &'static str,
}

const JA: Strings = Strings {
    today_section: "📅 今日の予定",
    pick_section: "⏰ 出勤時間を選択",
    start_header: "出勤",
    leave_header: "退勤",
    no_start_time: "出勤時間を設定してください",
    start_recorded: "出勤時間を記録しました",
    start_cleared: "出勤時間をリセットしました",
    leave_label: "退勤",
    confirm_reset: "今日の出勤時間をリセットしますか? [y/N] ",
    aborted: "中止しました",
};

const EN: Strings = Strings {
    today_section: "📅 Today",
    pick_section: "⏰ Select Start Time",
    start_header: "START",
    leave_header: "LEAVE",
    no_start_time: "Set your start time",
    start_recorded: "Start time recorded",
    start_cleared: "Start time cleared",
    leave_label: "leave",
    confirm_reset: "Clear today's start time? [y/N] ",
    aborted: "Aborted",
};

impl Language {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Ja => &JA,
            Language::En => &EN,
        }
    }

    /// "あと 2時間50分" / "2h 50m left" — or the overtime variant once the
    /// leave time is behind us.
    pub fn remaining_label(&self, r: &Remaining) -> String {
        match (self, r.is_past) {
            (Language::Ja, false) => format!("あと {}時間{}分", r.hours, r.minutes),
            (Language::Ja, true) => format!("{}時間{}分 残業中", r.hours, r.minutes),
            (Language::En, false) => format!("{}h {}m left", r.hours, r.minutes),
            (Language::En, true) => format!("{}h {}m overtime", r.hours, r.minutes),
        }
    }

    /// "🏠 18:00 退勤" / "🏠 Leave at 18:00"
    pub fn leave_display(&self, time: &str) -> String {
        match self {
            Language::Ja => format!("🏠 {} 退勤", time),
            Language::En => format!("🏠 Leave at {}", time),
        }
    }

    /// "勤務8h 休憩60m" / "Work 8h Break 60m"
    pub fn work_break_tag(&self, work_hours: f64, break_minutes: i64) -> String {
        match self {
            Language::Ja => format!("勤務{}h 休憩{}m", work_hours, break_minutes),
            Language::En => format!("Work {}h Break {}m", work_hours, break_minutes),
        }
    }

    /// One-line summary: "18:00 退勤 - あと 3時間0分" / "18:00 leave - 3h 0m left"
    pub fn subtitle(&self, leave_time: &str, r: &Remaining) -> String {
        format!(
            "{} {} - {}",
            leave_time,
            self.strings().leave_label,
            self.remaining_label(r)
        )
    }

    /// Parse an explicit language tag (CLI flag or config value).
    pub fn from_tag(tag: &str) -> AppResult<Self> {
        match tag.to_lowercase().as_str() {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(AppError::InvalidLanguage(other.to_string())),
        }
    }

    /// Resolve the configured preference: an explicit tag, or "system",
    /// which inspects the usual locale environment variables.
    pub fn resolve(pref: &str) -> Self {
        match pref.to_lowercase().as_str() {
            "ja" => Language::Ja,
            "en" => Language::En,
            _ => Self::system(),
        }
    }

    fn system() -> Self {
        let locale = env::var("LC_ALL")
            .or_else(|_| env::var("LC_MESSAGES"))
            .or_else(|_| env::var("LANG"))
            .unwrap_or_default();

        if locale.starts_with("ja") {
            Language::Ja
        } else {
            Language::En
        }
    }
}
