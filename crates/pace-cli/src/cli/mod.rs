use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pace` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pace",
    version,
    about = "Pace - lead-time forecasting and capacity rollups"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Planning snapshot to read (defaults to `general.snapshot_path`)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Forecast as of this instant, RFC 3339 (defaults to the snapshot's
    /// `captured_at`, then the current time)
    #[arg(long, global = true)]
    pub as_of: Option<DateTime<Utc>>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            snapshot: self.snapshot.clone(),
            as_of: self.as_of,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
