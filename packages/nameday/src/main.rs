//! CLI entry point for name day lookups.

use std::process::ExitCode;

use clap::Parser;
use nameday_calendar::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return cli::handle_parse_error(&e),
    };

    // WARN by default (DEBUG with --verbose), respecting RUST_LOG
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run(&cli)
}
