//======================================================================
// src/main.rs
// Entry point of the `rc5x` command-line driver.
//======================================================================

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing (controlled by RUST_LOG). Logs go to stderr so
    // digests on stdout stay pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = commands::run(cli, &mut stdout) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
