//! Command-line interface for name day lookups.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::calendar::lookup;
use crate::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::error::{NameDayError, Result};
use crate::render::{render_json, render_text, usage};

/// Program name shown in the usage message.
pub const PROGRAM: &str = "nameday";

/// Look up the names celebrated per country on a given day.
#[derive(Debug, Parser)]
#[command(name = "nameday")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Month name (e.g., march), case-insensitive
    pub month: String,

    /// Day of month
    #[arg(allow_hyphen_values = true)]
    pub day: String,

    /// Base URL of the name day calendar site
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Handle an argument parsing failure.
///
/// Help and version requests are printed as-is; anything else becomes the
/// usage message for both fields.
pub fn handle_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            // Nothing sensible to do if stdout is gone
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            print!("{}", usage(PROGRAM, "month and day"));
            ExitCode::from(2)
        }
    }
}

/// Run a lookup and print its result or a usage message.
pub fn run(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "Lookup failed");
            if !e.is_validation() {
                eprintln!("Error: {e}");
            }
            print!("{}", usage(PROGRAM, e.usage_field()));
            if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Execute a lookup and return the rendered output.
pub fn execute(cli: &Cli) -> Result<String> {
    let day = parse_day(&cli.day)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!(
        "Fetching name days for {} {}",
        style(&cli.month).cyan(),
        style(day).cyan()
    ));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = lookup(&cli.base_url, &cli.month, day);
    pb.finish_and_clear();
    let (query, name_days) = result?;

    if cli.json {
        render_json(&query, &name_days)
    } else {
        Ok(render_text(&query, &name_days))
    }
}

/// Parse the raw day argument as an integer.
fn parse_day(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| NameDayError::InvalidDay(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::parse_from(["nameday", "March", "25"]);
        assert_eq!(cli.month, "March");
        assert_eq!(cli.day, "25");
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_negative_day() {
        let cli = Cli::parse_from(["nameday", "march", "-3"]);
        assert_eq!(cli.day, "-3");
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from([
            "nameday",
            "june",
            "1",
            "--json",
            "--base-url",
            "http://localhost:1234",
        ]);
        assert!(cli.json);
        assert_eq!(cli.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_cli_missing_day_is_error() {
        let err = Cli::try_parse_from(["nameday", "march"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("25").unwrap(), 25);
        assert_eq!(parse_day(" 7 ").unwrap(), 7);
        assert_eq!(parse_day("-1").unwrap(), -1);
        assert!(matches!(parse_day("abc"), Err(NameDayError::InvalidDay(_))));
        assert!(matches!(parse_day("2.5"), Err(NameDayError::InvalidDay(_))));
    }

    #[test]
    fn test_execute_invalid_day_argument() {
        let cli = Cli::parse_from(["nameday", "march", "tomorrow"]);
        let err = execute(&cli).unwrap_err();
        assert_eq!(err.usage_field(), "day of month");
    }
}
