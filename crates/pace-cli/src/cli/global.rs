use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub snapshot: Option<PathBuf>,
    pub as_of: Option<DateTime<Utc>>,
    pub quiet: bool,
    pub verbose: bool,
}
