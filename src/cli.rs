//! Command-line interface definition.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mediasweep",
    version,
    about = "Reconcile an S3 media bucket against the application database",
    long_about = "mediasweep lists every object in the configured bucket, keeps the ones \
                  still referenced by the application database, and reports on them as a \
                  CSV export or a statistics summary. It never mutates the bucket or the \
                  database."
)]
pub struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Restrict the listing to keys under this prefix (overrides config)
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Exclude document snapshots from totals (overrides config)
    #[arg(long, global = true)]
    pub exclude_document_snapshots: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export retained objects as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print hierarchical summary statistics
    Stats,
}
