//! Derived response types returned by the forecasting engine.
//!
//! These are views recomputed on every request, never a source of truth.
//! Undefined values (zero throughput, missing inputs) serialize as `null`
//! rather than `Infinity`/`NaN`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ForecastStatus, RateUnit, VarianceStatus};

/// Window label used when a forecast cannot be computed.
pub const UNKNOWN_WINDOW: &str = "unknown";

/// Completion rate of a team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ThroughputRate {
    pub value: f64,
    pub unit: RateUnit,
}

impl ThroughputRate {
    #[must_use]
    pub const fn per_week(value: f64) -> Self {
        Self {
            value,
            unit: RateUnit::Week,
        }
    }

    #[must_use]
    pub const fn per_day(value: f64) -> Self {
        Self {
            value,
            unit: RateUnit::Day,
        }
    }

    /// Items per week, whatever the stored unit.
    #[must_use]
    pub fn weekly(self) -> f64 {
        self.value * RateUnit::Week.days() / self.unit.days()
    }

    /// Items per day, whatever the stored unit.
    #[must_use]
    pub fn daily(self) -> f64 {
        self.value / self.unit.days()
    }

    /// Whether the rate can be divided into (finite and strictly positive).
    #[must_use]
    pub fn is_defined(self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

/// Queue-position forecast for one backlog item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ItemForecast {
    pub item_id: String,
    /// Number of items ahead of this one. `None` when the item is unknown.
    pub queue_position: Option<usize>,
    /// Weeks until work starts, one decimal. `None` when undefined.
    pub weeks: Option<f64>,
    /// Human-readable window, e.g. `~0.4 weeks`, or `unknown`.
    pub window: String,
    pub estimated_date: Option<NaiveDate>,
}

impl ItemForecast {
    /// The "cannot forecast" view.
    #[must_use]
    pub fn unknown(item_id: impl Into<String>, queue_position: Option<usize>) -> Self {
        Self {
            item_id: item_id.into(),
            queue_position,
            weeks: None,
            window: UNKNOWN_WINDOW.to_string(),
            estimated_date: None,
        }
    }

    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.weeks.is_some()
    }
}

/// Item counts per priority bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityBuckets {
    pub p1: usize,
    pub p2: usize,
    pub p3: usize,
    pub total: usize,
}

/// Cumulative backlog load of a team, in weeks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TeamLoad {
    pub team_id: String,
    pub throughput: ThroughputRate,
    /// Weeks to clear P1.
    pub p1_load_weeks: Option<f64>,
    /// Weeks to clear P1 and P2.
    pub p2_load_weeks: Option<f64>,
    /// Weeks to clear the whole backlog.
    pub total_load_weeks: Option<f64>,
    pub buckets: PriorityBuckets,
}

/// Lead time of one objective/team pairing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TeamLeadTime {
    pub team_id: String,
    /// `ceil(base + dependency buffer)`; `None` when throughput is undefined.
    pub lead_time_days: Option<i64>,
    pub base_lead_time_days: Option<i64>,
    /// P1 + P2 items already queued.
    pub queue_length: usize,
    pub new_item_count: u32,
    /// Items per day, two decimals.
    pub throughput: f64,
    pub dependency_buffer_days: i64,
    pub calculated_date: Option<NaiveDate>,
}

/// Max/average aggregation over a set of team lead times.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeadTimeAggregate {
    pub total_lead_time_days: Option<i64>,
    /// Every team id achieving the max.
    pub critical_path: Vec<String>,
    /// Informational only; never drives a date.
    pub average_lead_time_days: Option<i64>,
}

/// Calculated date measured against a target date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Variance {
    pub variance_days: i64,
    pub status: VarianceStatus,
    pub is_late: bool,
}

/// Why an objective forecast is partial or unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastIssue {
    /// An assigned unit has no backlog, history, or org-tree entry.
    UnknownTeam { team_id: String },
    /// A team's throughput is zero or not finite.
    UndefinedThroughput { team_id: String },
    /// A dependency edge names an objective outside the project.
    UnknownPredecessor { objective_id: String },
    /// A predecessor objective has no computable lead time.
    UndefinedPredecessor { objective_id: String },
    /// A child objective has no computable lead time.
    UndefinedChild { objective_id: String },
    /// No teams and no children.
    Unassigned,
}

/// Forecast for one objective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ObjectiveForecast {
    pub objective_id: String,
    pub parent_objective_id: Option<String>,
    pub team_lead_times: Vec<TeamLeadTime>,
    pub dependency_buffer_days: i64,
    pub total_lead_time_days: Option<i64>,
    pub average_lead_time_days: Option<i64>,
    /// Team ids achieving the objective's max lead time.
    pub critical_path: Vec<String>,
    /// Child objective ids achieving the objective's max lead time.
    pub critical_child_ids: Vec<String>,
    pub calculated_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub variance: Option<Variance>,
    pub status: ForecastStatus,
    pub issues: Vec<ForecastIssue>,
}

/// Rolled-up forecast for a whole project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectForecast {
    pub project_id: String,
    /// The single "today" every date in this forecast is anchored to.
    pub as_of: NaiveDate,
    pub objective_forecasts: Vec<ObjectiveForecast>,
    pub project_lead_time_days: Option<i64>,
    pub project_calculated_date: Option<NaiveDate>,
    pub critical_path_objective_ids: Vec<String>,
    pub target_date: Option<NaiveDate>,
    pub variance_vs_target: Option<Variance>,
}

impl ProjectForecast {
    /// Objectives that could not be fully forecast.
    pub fn flagged(&self) -> impl Iterator<Item = &ObjectiveForecast> {
        self.objective_forecasts
            .iter()
            .filter(|forecast| forecast.status != ForecastStatus::Complete)
    }
}
