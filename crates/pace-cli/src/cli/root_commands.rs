use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Completion rate of a team.
    Throughput(ThroughputArgs),
    /// Forecast when work on a backlog item can start.
    #[command(name = "forecast-item")]
    ForecastItem(ForecastItemArgs),
    /// Weeks of queued work per priority tier.
    #[command(name = "team-load")]
    TeamLoad(TeamLoadArgs),
    /// Roll up a project's objectives into a delivery forecast.
    Project(ProjectArgs),
    /// Classify a calculated date against a target date.
    Variance(VarianceArgs),
    /// Dump JSON schema for an input or output type.
    Schema(SchemaArgs),
}

/// Arguments for `pace throughput`.
#[derive(Clone, Debug, Args)]
pub struct ThroughputArgs {
    /// Team id.
    #[arg(long)]
    pub team: String,
    /// Trailing window in days (defaults to `forecast.window_days`).
    #[arg(long, conflicts_with = "weekly")]
    pub window_days: Option<u32>,
    /// Use weekly completion buckets instead of completion timestamps.
    #[arg(long)]
    pub weekly: bool,
    /// Only average the most recent N weekly buckets.
    #[arg(long, requires = "weekly")]
    pub last: Option<usize>,
}

/// Arguments for `pace forecast-item`.
#[derive(Clone, Debug, Args)]
pub struct ForecastItemArgs {
    /// Backlog item id.
    pub item_id: String,
}

/// Arguments for `pace team-load`.
#[derive(Clone, Debug, Args)]
pub struct TeamLoadArgs {
    /// Team id.
    #[arg(long)]
    pub team: String,
}

/// Arguments for `pace project`.
#[derive(Clone, Debug, Args)]
pub struct ProjectArgs {
    /// Project id.
    pub project_id: String,
}

/// Arguments for `pace variance`.
#[derive(Clone, Debug, Args)]
pub struct VarianceArgs {
    /// Calculated delivery date (YYYY-MM-DD).
    #[arg(long)]
    pub calculated: NaiveDate,
    /// Target date (YYYY-MM-DD).
    #[arg(long)]
    pub target: NaiveDate,
}

/// Types `pace schema` can print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    #[default]
    Snapshot,
    ProjectForecast,
    ItemForecast,
    TeamLoad,
}

/// Arguments for `pace schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value_t = SchemaKind::Snapshot)]
    pub kind: SchemaKind,
}
