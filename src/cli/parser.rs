use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

/// Command-line interface definition for leavetime
/// CLI application to compute leave times and track today's shift countdown
#[derive(Parser)]
#[command(
    name = "leavetime",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple leave-time CLI: record today's start time and watch the countdown to when you can leave",
    long_about = None
)]
pub struct Cli {
    /// Override state database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the display language (ja or en)
    #[arg(global = true, long = "lang")]
    pub lang: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the current wall-clock time (HH:MM, useful for tests)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The instant all computations run against: the real clock, or the
    /// hidden `--now HH:MM` override anchored on today's date.
    pub fn current_instant(&self) -> AppResult<NaiveDateTime> {
        match &self.now {
            Some(s) => {
                let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
                Ok(date::today().and_time(t))
            }
            None => Ok(date::now()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the state database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record today's start time (defaults to now)
    Start {
        /// Start time (HH:MM); omit to clock in right now
        time: Option<String>,
    },

    /// Show today's leave time and the remaining/overtime countdown
    Status {
        #[arg(long = "short", help = "Print a compact one-line summary")]
        short: bool,

        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },

    /// List the candidate start times with their leave times
    List {
        #[arg(long = "json", help = "Print the candidate list as JSON")]
        json: bool,
    },

    /// Clear today's recorded start time
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Re-evaluate the countdown on a fixed interval
    Watch {
        #[arg(
            long = "interval",
            default_value_t = 60,
            value_parser = clap::value_parser!(u64).range(1..=3600),
            help = "Refresh interval in seconds"
        )]
        interval: u64,

        /// Stop after N refreshes (useful for tests); runs forever when omitted
        #[arg(long = "ticks", hide = true)]
        ticks: Option<u64>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
