//! Command-line argument parsing using clap.
//!
//! Arguments: `[START [STOP]]`, each a six-digit `YYYYMM` value.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::error::CalError;
use crate::types::YearMonth;

#[derive(Parser, Debug)]
#[command(name = "caltext")]
#[command(about = "Renders a plaintext calendar for a range of months", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First month to show (YYYYMM). Defaults to the current month.
    #[arg(index = 1, value_name = "START", value_hint = ValueHint::Other)]
    pub start_arg: Option<String>,

    /// Last month to show (YYYYMM). Defaults to START.
    #[arg(index = 2, value_name = "STOP", value_hint = ValueHint::Other)]
    pub stop_arg: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging options")]
    pub verbose: u8,

    /// Append log lines to this file instead of stderr.
    #[arg(
        short = 'l',
        long,
        value_name = "path",
        value_hint = ValueHint::FilePath,
        help_heading = "Logging options"
    )]
    pub log_file: Option<PathBuf>,

    /// Write the process id to this file at startup.
    #[arg(
        short = 'p',
        long,
        value_name = "path",
        value_hint = ValueHint::FilePath,
        help_heading = "Output options"
    )]
    pub pid_file: Option<PathBuf>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Examples:
  caltext                   Current month
  caltext 202403            March 2024
  caltext 202312 202402     December 2023 through February 2024
  caltext -v -l cal.log 202401 202412
                            Log at info level to cal.log";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Get today's date, respecting CALTEXT_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("CALTEXT_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Resolve the month range from positional arguments.
///
/// - no args: current month only
/// - START: that month only
/// - START STOP: the inclusive range
///
/// Malformed values are reported as `InvalidDate`; bounds are checked when
/// the range is rendered.
pub fn resolve_range(args: &Args) -> Result<(YearMonth, YearMonth), CalError> {
    let start = match args.start_arg.as_deref() {
        Some(s) => s.parse::<YearMonth>()?,
        None => YearMonth::from(get_today_date()),
    };
    let stop = match args.stop_arg.as_deref() {
        Some(s) => s.parse::<YearMonth>()?,
        None => start,
    };
    Ok((start, stop))
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &std::path::Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}
