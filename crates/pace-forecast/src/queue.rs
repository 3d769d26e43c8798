//! Priority-queue forecasting for single backlog items and whole-team load.
//!
//! Queue order is tier first (`P1` before `P2` before `P3`). Inside a tier
//! nothing else is assumed unless a stack rank is present:
//!
//! - no item in the tier carries a rank: every other item of the tier counts
//!   as ahead (set membership);
//! - some item in the tier carries a rank: ascending rank, unranked items
//!   last, then arrival order.

use chrono::NaiveDate;
use pace_core::entities::BacklogItem;
use pace_core::enums::Priority;
use pace_core::responses::{ItemForecast, PriorityBuckets, TeamLoad, ThroughputRate};

use crate::numeric::{ceil_days, round_to};

/// Sort key inside a ranked tier.
fn rank_key(item: &BacklogItem, position: usize) -> (bool, i64, usize) {
    (
        item.stack_rank.is_none(),
        item.stack_rank.unwrap_or_default(),
        position,
    )
}

/// Number of items ahead of `item_id`, or `None` if it is not in `backlog`.
#[must_use]
pub fn items_ahead(backlog: &[BacklogItem], item_id: &str) -> Option<usize> {
    let (target_pos, target) = backlog
        .iter()
        .enumerate()
        .find(|(_, item)| item.id == item_id)?;

    let tier_is_ranked = backlog
        .iter()
        .any(|item| item.priority == target.priority && item.stack_rank.is_some());
    let target_key = rank_key(target, target_pos);

    let ahead = backlog
        .iter()
        .enumerate()
        .filter(|&(pos, item)| {
            if pos == target_pos {
                return false;
            }
            match item.priority.cmp(&target.priority) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => !tier_is_ranked || rank_key(item, pos) < target_key,
            }
        })
        .count();

    Some(ahead)
}

/// Human-readable forecast window, e.g. `~0.4 weeks`.
#[must_use]
pub fn format_window(weeks: f64) -> String {
    format!("~{weeks} weeks")
}

/// Forecast when work on `item_id` can start.
///
/// Unknown items and undefined throughput yield the `unknown` forecast
/// rather than an error.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn forecast_item(
    item_id: &str,
    backlog: &[BacklogItem],
    throughput: ThroughputRate,
    today: NaiveDate,
) -> ItemForecast {
    let Some(ahead) = items_ahead(backlog, item_id) else {
        tracing::debug!(item_id, "item not in backlog; forecast unknown");
        return ItemForecast::unknown(item_id, None);
    };

    if !throughput.is_defined() {
        tracing::debug!(item_id, ahead, "throughput undefined; forecast unknown");
        return ItemForecast::unknown(item_id, Some(ahead));
    }

    let raw_weeks = ahead as f64 / throughput.weekly();
    let weeks = round_to(raw_weeks, 1);
    let estimated_date = ceil_days(raw_weeks * 7.0)
        .and_then(|days| u64::try_from(days).ok())
        .and_then(|days| today.checked_add_days(chrono::Days::new(days)));

    ItemForecast {
        item_id: item_id.to_string(),
        queue_position: Some(ahead),
        weeks: Some(weeks),
        window: format_window(weeks),
        estimated_date,
    }
}

/// Item counts per priority tier.
#[must_use]
pub fn buckets(backlog: &[BacklogItem]) -> PriorityBuckets {
    let count = |tier: Priority| backlog.iter().filter(|item| item.priority == tier).count();
    PriorityBuckets {
        p1: count(Priority::P1),
        p2: count(Priority::P2),
        p3: count(Priority::P3),
        total: backlog.len(),
    }
}

/// Weeks of work queued in the P1, P1+P2, and whole backlog.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn team_load(team_id: &str, backlog: &[BacklogItem], throughput: ThroughputRate) -> TeamLoad {
    let buckets = buckets(backlog);
    let load = |count: usize| {
        throughput
            .is_defined()
            .then(|| round_to(count as f64 / throughput.weekly(), 1))
    };

    TeamLoad {
        team_id: team_id.to_string(),
        throughput,
        p1_load_weeks: load(buckets.p1),
        p2_load_weeks: load(buckets.p1 + buckets.p2),
        total_load_weeks: load(buckets.total),
        buckets,
    }
}
