use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::candidates::candidate_start_times;
use crate::db::pool::DbPool;
use crate::db::state;
use crate::errors::AppResult;
use crate::i18n::Language;
use crate::utils::table::{Column, Table};

/// List the quarter-hour candidate start times with their leave times.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = &cli.command {
        let lang = Language::resolve(&cfg.language);
        let now = cli.current_instant()?;

        let (work_hours, break_minutes) = cfg.work_preferences();
        let options = candidate_start_times(work_hours, break_minutes);

        if *json {
            println!("{}", serde_json::to_string_pretty(&options).unwrap());
            return Ok(());
        }

        // Today's recorded start, to mark the matching row. The list is
        // still useful without a state DB, so failures degrade to no mark.
        let recorded = DbPool::new(&cfg.database)
            .ok()
            .and_then(|mut pool| state::today_start(&mut pool, now.date()).ok())
            .flatten();

        println!("{}", lang.strings().pick_section);
        println!("{}\n", lang.work_break_tag(work_hours, break_minutes));

        let mut table = Table::new(vec![
            Column {
                header: "".to_string(),
                width: 2,
            },
            Column {
                header: lang.strings().start_header.to_string(),
                width: 6,
            },
            Column {
                header: lang.strings().leave_header.to_string(),
                width: 6,
            },
        ]);

        for opt in &options {
            let marker = match recorded {
                Some(t) if t == opt.start_time => "▶",
                _ => " ",
            };
            table.add_row(vec![
                marker.to_string(),
                opt.start_str(),
                opt.leave_str(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
