use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::state;
use crate::errors::AppResult;
use crate::i18n::Language;
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_countdown};
use crate::utils::formatting::delta2readable;

/// Show today's leave time and the countdown against the current clock.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { short, json } = &cli.command {
        let lang = Language::resolve(&cfg.language);
        let now = cli.current_instant()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let start = state::today_start(&mut pool, now.date())?;

        let Some(start) = start else {
            // No start recorded today: a hint, not an error.
            messages::warning(lang.strings().no_start_time);
            return Ok(());
        };

        let (work_hours, break_minutes) = cfg.work_preferences();
        let status = Core::build_status(start, work_hours, break_minutes, now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&status).unwrap());
            return Ok(());
        }

        if *short {
            println!("{}", lang.subtitle(&status.leave_str(), &status.remaining));
            return Ok(());
        }

        println!("{}", lang.strings().today_section);
        println!("{}", lang.leave_display(&status.leave_str()));
        println!(
            "{}{} ({}){}",
            color_for_countdown(status.remaining.is_past),
            lang.remaining_label(&status.remaining),
            delta2readable(&status.remaining, true),
            RESET
        );
        messages::hint(lang.work_break_tag(work_hours, break_minutes));
    }

    Ok(())
}
