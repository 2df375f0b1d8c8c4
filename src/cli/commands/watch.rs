use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::state;
use crate::errors::AppResult;
use crate::i18n::Language;
use std::thread;
use std::time::Duration;

/// Poll-driven re-evaluation loop: recompute the countdown with a fresh
/// "now" every interval. The timer lives here, never in the calculator —
/// each tick is a complete, independent computation.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = &cli.command {
        let lang = Language::resolve(&cfg.language);
        let mut pool = DbPool::new(&cfg.database)?;
        let (work_hours, break_minutes) = cfg.work_preferences();

        let mut tick: u64 = 0;
        loop {
            // Fresh instant on every tick; the hidden --now override pins
            // the clock for tests.
            let now = cli.current_instant()?;

            match state::today_start(&mut pool, now.date())? {
                Some(start) => {
                    let status = Core::build_status(start, work_hours, break_minutes, now);
                    println!(
                        "[{}] {}",
                        now.format("%H:%M:%S"),
                        lang.subtitle(&status.leave_str(), &status.remaining)
                    );
                }
                None => {
                    println!(
                        "[{}] {}",
                        now.format("%H:%M:%S"),
                        lang.strings().no_start_time
                    );
                }
            }

            tick += 1;
            if let Some(max) = ticks
                && tick >= *max
            {
                break;
            }

            thread::sleep(Duration::from_secs(*interval));
        }
    }

    Ok(())
}
