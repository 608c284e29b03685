//! mediasweep - reconcile an S3 media bucket against the application database.
//!
//! Usage:
//!   mediasweep export [--output FILE]   CSV export of retained objects
//!   mediasweep stats                    Hierarchical summary statistics
//!   mediasweep --help                   Show help

mod cli;
mod error;
mod export;
mod report;
mod run;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // The exn tree carries the failing phase and its causes.
            eprintln!("error: {error:?}");
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so a CSV export piped from stdout stays clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
