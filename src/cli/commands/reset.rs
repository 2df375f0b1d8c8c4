use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, state};
use crate::errors::AppResult;
use crate::i18n::Language;
use crate::ui::messages;
use std::io::{self, BufRead, Write};

/// Clear today's recorded start time.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = &cli.command {
        let lang = Language::resolve(&cfg.language);

        if !*yes {
            print!("{}", lang.strings().confirm_reset);
            io::stdout().flush()?;

            let mut answer = String::new();
            io::stdin().lock().read_line(&mut answer)?;

            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                messages::info(lang.strings().aborted);
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;
        state::clear_today_start(&mut pool)?;

        messages::success(lang.strings().start_cleared);

        if let Err(e) = log::ltlog(&pool.conn, "reset", "", "Cleared today's start time") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
