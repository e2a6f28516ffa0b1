//! Command-line argument parsing using clap.

use std::io::IsTerminal;

use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::parse_date;
use crate::controller::today;
use crate::error::CalendarError;
use crate::types::{ConfigPatch, DEFAULT_LOCALE};

/// Environment variable overriding today's date, `YYYY-MM-DD`.
pub const TODAY_ENV_VAR: &str = "MONTHGRID_TODAY";

#[derive(Parser, Debug)]
#[command(name = "monthgrid")]
#[command(about = "Prints the month-view grid for a month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First day of the week (0 = Sunday .. 6 = Saturday).
    #[arg(
        short = 'f',
        long = "first-day",
        default_value_t = 0,
        help_heading = "Calendar options",
        value_name = "index"
    )]
    pub first_day: u8,

    /// Locale for labels (e.g. en-US, de_DE, ru_RU).
    #[arg(
        short = 'l',
        long,
        default_value = DEFAULT_LOCALE,
        help_heading = "Calendar options",
        value_name = "tag"
    )]
    pub locale: String,

    /// Initial date to display (YYYY-MM-DD), defaults to today.
    #[arg(short = 'd', long = "date", help_heading = "Calendar options", value_name = "date")]
    pub initial_date: Option<String>,

    /// Selected date (YYYY-MM-DD).
    #[arg(short = 's', long, help_heading = "Calendar options", value_name = "date")]
    pub select: Option<String>,

    /// Navigate forward this many months.
    #[arg(
        short = 'n',
        long,
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "months"
    )]
    pub next: u32,

    /// Navigate backward this many months.
    #[arg(
        short = 'p',
        long,
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "months"
    )]
    pub prev: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Legend:
  [dd]  today
  <dd>  selected date
  (dd)  day from an adjacent month

Examples:
  monthgrid                        Current month, weeks start on Sunday
  monthgrid -f 1                   Weeks start on Monday
  monthgrid -d 2024-03-15          March 2024
  monthgrid -d 2024-12-01 -n 1     January 2025
  monthgrid -l de-DE -s 2024-03-15 German labels, 15 March selected";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Configuration overrides given on the command line.
    pub fn config_patch(&self) -> ConfigPatch {
        ConfigPatch {
            first_day_of_week: Some(self.first_day),
            weekends: None,
            locale: Some(self.locale.clone()),
            initial_date: self.initial_date.clone(),
        }
    }

    /// Parsed `--select` value.
    pub fn selected_date(&self) -> Result<Option<NaiveDate>, CalendarError> {
        self.select.as_deref().map(parse_date).transpose()
    }
}

/// Get today's date, respecting MONTHGRID_TODAY environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var(TODAY_ENV_VAR)
        && let Ok(date) = parse_date(&test_time)
    {
        return date;
    }
    today()
}

/// Install the stderr tracing subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
}
