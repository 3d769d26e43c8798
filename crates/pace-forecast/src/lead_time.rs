//! Lead time for one objective/team pairing, and max-aggregation across teams.
//!
//! ```text
//! throughput  = windowed(history, window_days)            items/day
//! base        = (queue_length + new_item_count) / throughput
//! buffer      = max(predecessor lead times)
//! lead_time   = ceil(base + buffer)
//! date        = today + lead_time
//! ```
//!
//! Every day count is ceiling-rounded.

use chrono::NaiveDate;
use pace_core::entities::{BacklogItem, CompletionRecord};
use pace_core::enums::Priority;
use pace_core::responses::{LeadTimeAggregate, TeamLeadTime, ThroughputRate};

use crate::context::ForecastContext;
use crate::critical_path::{dependency_buffer, max_with_ties};
use crate::error::ForecastError;
use crate::numeric::{ceil_days, round_to};
use crate::throughput;

/// Inputs for one objective/team pairing.
#[derive(Debug, Clone, Copy)]
pub struct LeadTimeInput<'a> {
    pub team_id: &'a str,
    pub new_item_count: u32,
    /// The team's backlog; only P1 and P2 items form the queue.
    pub backlog: &'a [BacklogItem],
    pub history: &'a [CompletionRecord],
    /// Lead times (days) of predecessor objectives.
    pub dependency_lead_times: &'a [f64],
}

/// P1 + P2 items already queued.
#[must_use]
pub fn queue_length(backlog: &[BacklogItem]) -> usize {
    backlog
        .iter()
        .filter(|item| item.priority <= Priority::P2)
        .count()
}

/// Lead time for one team, using windowed throughput over its history.
///
/// # Errors
///
/// Propagates [`ForecastError::InvalidInput`] from an invalid window.
pub fn team_lead_time(
    input: &LeadTimeInput<'_>,
    ctx: &ForecastContext,
) -> Result<TeamLeadTime, ForecastError> {
    let settings = ctx.settings();
    let rate = throughput::windowed(
        input.history,
        settings.window_days,
        ctx.now(),
        settings.throughput_floor_per_day,
    )?;

    Ok(lead_time_from_rate(
        input.team_id,
        queue_length(input.backlog),
        input.new_item_count,
        rate,
        input.dependency_lead_times,
        ctx.today(),
    ))
}

/// Lead time for an already-known rate.
///
/// A rate that is zero or not finite yields `None` day counts and date.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lead_time_from_rate(
    team_id: &str,
    queue_length: usize,
    new_item_count: u32,
    rate: ThroughputRate,
    dependency_lead_times: &[f64],
    today: NaiveDate,
) -> TeamLeadTime {
    let dependency_buffer_days = ceil_days(dependency_buffer(dependency_lead_times)).unwrap_or(0);

    let (base_lead_time_days, lead_time_days) = if rate.is_defined() {
        let base = (queue_length as f64 + f64::from(new_item_count)) / rate.daily();
        (
            ceil_days(base),
            ceil_days(base + dependency_buffer_days as f64),
        )
    } else {
        tracing::warn!(team_id, rate = rate.value, "throughput undefined; lead time unavailable");
        (None, None)
    };

    let calculated_date = lead_time_days
        .and_then(|days| u64::try_from(days).ok())
        .and_then(|days| today.checked_add_days(chrono::Days::new(days)));

    let throughput = if rate.value.is_finite() {
        round_to(rate.daily(), 2)
    } else {
        0.0
    };

    TeamLeadTime {
        team_id: team_id.to_string(),
        lead_time_days,
        base_lead_time_days,
        queue_length,
        new_item_count,
        throughput,
        dependency_buffer_days,
        calculated_date,
    }
}

/// Max (critical path) and ceiling mean across team lead times.
///
/// Undefined team lead times are left out of both figures.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn aggregate_lead_times(team_lead_times: &[TeamLeadTime]) -> LeadTimeAggregate {
    let defined: Vec<(&str, i64)> = team_lead_times
        .iter()
        .filter_map(|team| team.lead_time_days.map(|days| (team.team_id.as_str(), days)))
        .collect();

    let Some((max, critical)) = max_with_ties(defined.iter().copied()) else {
        return LeadTimeAggregate::default();
    };

    let sum: i64 = defined.iter().map(|(_, days)| days).sum();
    let average = ceil_days(sum as f64 / defined.len() as f64);

    LeadTimeAggregate {
        total_lead_time_days: Some(max),
        critical_path: critical.into_iter().map(str::to_string).collect(),
        average_lead_time_days: average,
    }
}
