use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::{log, state};
use crate::errors::{AppError, AppResult};
use crate::i18n::Language;
use crate::ui::messages;
use crate::utils::time::{format_time, parse_time};
use chrono::Timelike;

/// Record today's start time and show the resulting leave status.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { time } = &cli.command {
        let lang = Language::resolve(&cfg.language);
        let now = cli.current_instant()?;

        // Explicit HH:MM, or the current clock floored to the minute.
        let start = match time {
            Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            None => now.time().with_second(0).unwrap().with_nanosecond(0).unwrap(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        state::set_today_start(&mut pool, now.date(), start)?;

        let (work_hours, break_minutes) = cfg.work_preferences();
        let status = Core::build_status(start, work_hours, break_minutes, now);

        messages::success(format!(
            "{} ({})",
            lang.strings().start_recorded,
            format_time(start)
        ));
        println!("{}", lang.leave_display(&status.leave_str()));
        println!("{}", lang.remaining_label(&status.remaining));
        messages::hint(lang.work_break_tag(work_hours, break_minutes));

        if let Err(e) = log::ltlog(
            &pool.conn,
            "start",
            &format_time(start),
            &format!("Recorded start time {}", format_time(start)),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
