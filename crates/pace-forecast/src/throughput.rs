//! Team throughput from completion history.
//!
//! Two formulas coexist on purpose and are kept as separate operations:
//!
//! - [`bucketed`]: `round(mean(weekly counts))` items/week. No history gives
//!   `0`, which queue forecasting reads as "forecast unknown".
//! - [`windowed`]: completions inside `[now - window, now]` divided by the
//!   window, items/day. No completions in the window gives the configured
//!   floor (0.25/day by default), which lead-time estimation reads as "slow
//!   but non-zero".

use chrono::{DateTime, TimeDelta, Utc};
use pace_core::entities::CompletionRecord;
use pace_core::responses::ThroughputRate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Which slice of history a throughput request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThroughputWindow {
    /// Weekly buckets; `last` keeps only the most recent N (all when `None`).
    Buckets { last: Option<usize> },
    /// Raw completions in the trailing `days`.
    Days { days: u32 },
}

/// Mean of weekly completed counts, rounded to a whole number of items/week.
///
/// # Errors
///
/// Returns [`ForecastError::NegativeCount`] if any bucket is negative.
#[allow(clippy::cast_precision_loss)]
pub fn bucketed(weekly_counts: &[i64]) -> Result<ThroughputRate, ForecastError> {
    if let Some(&value) = weekly_counts.iter().find(|&&count| count < 0) {
        return Err(ForecastError::NegativeCount {
            field: "weekly_count".into(),
            value,
        });
    }
    if weekly_counts.is_empty() {
        return Ok(ThroughputRate::per_week(0.0));
    }

    let total: i128 = weekly_counts.iter().map(|&count| i128::from(count)).sum();
    let mean = total as f64 / weekly_counts.len() as f64;
    Ok(ThroughputRate::per_week(mean.round()))
}

/// The most recent `last` buckets (all of them when `None`).
#[must_use]
pub fn recent_buckets(weekly_counts: &[i64], last: Option<usize>) -> &[i64] {
    match last {
        Some(n) if n < weekly_counts.len() => &weekly_counts[weekly_counts.len() - n..],
        _ => weekly_counts,
    }
}

/// Completions per day over the trailing `window_days`, floored when empty.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] for a zero-day window, or one
/// reaching back past the earliest representable instant.
#[allow(clippy::cast_precision_loss)]
pub fn windowed(
    records: &[CompletionRecord],
    window_days: u32,
    now: DateTime<Utc>,
    floor_per_day: f64,
) -> Result<ThroughputRate, ForecastError> {
    if window_days == 0 {
        return Err(ForecastError::InvalidInput(
            "throughput window must be at least one day".into(),
        ));
    }

    let start = TimeDelta::try_days(i64::from(window_days))
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            ForecastError::InvalidInput(format!(
                "throughput window of {window_days} days reaches before the earliest supported date"
            ))
        })?;
    let completed = records
        .iter()
        .filter(|record| record.completed_at >= start && record.completed_at <= now)
        .count();

    if completed == 0 {
        tracing::debug!(
            window_days,
            floor_per_day,
            "no completions in window; using throughput floor"
        );
        return Ok(ThroughputRate::per_day(floor_per_day));
    }

    Ok(ThroughputRate::per_day(
        completed as f64 / f64::from(window_days),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pace_core::enums::RateUnit;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> CompletionRecord {
        CompletionRecord {
            completed_at: now() - TimeDelta::days(days),
        }
    }

    #[test]
    fn bucketed_rounds_the_mean() {
        let rate = bucketed(&[12, 10, 8, 14, 9, 11]).unwrap();
        assert_eq!(rate, ThroughputRate::per_week(11.0));
    }

    #[test]
    fn bucketed_rounds_half_up() {
        assert_eq!(bucketed(&[1, 2]).unwrap().value, 2.0);
        assert_eq!(bucketed(&[1, 1, 2]).unwrap().value, 1.0);
    }

    #[test]
    fn bucketed_empty_is_zero_not_floor() {
        let rate = bucketed(&[]).unwrap();
        assert_eq!(rate.value, 0.0);
        assert!(!rate.is_defined());
    }

    #[test]
    fn bucketed_rejects_negative_counts() {
        let err = bucketed(&[3, -1]).unwrap_err();
        assert!(matches!(err, ForecastError::NegativeCount { value: -1, .. }));
    }

    #[test]
    fn recent_buckets_takes_the_tail() {
        assert_eq!(recent_buckets(&[1, 2, 3, 4], Some(2)), &[3, 4]);
        assert_eq!(recent_buckets(&[1, 2], Some(5)), &[1, 2]);
        assert_eq!(recent_buckets(&[1, 2], None), &[1, 2]);
    }

    #[test]
    fn windowed_counts_only_inside_window() {
        let records = vec![days_ago(1), days_ago(10), days_ago(29), days_ago(31)];
        let rate = windowed(&records, 30, now(), 0.25).unwrap();
        assert_eq!(rate.unit, RateUnit::Day);
        assert!((rate.value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn windowed_includes_boundaries() {
        let records = vec![days_ago(30), days_ago(0)];
        let rate = windowed(&records, 30, now(), 0.25).unwrap();
        assert!((rate.value - 2.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn windowed_ignores_future_records() {
        let records = vec![days_ago(-2)];
        let rate = windowed(&records, 30, now(), 0.25).unwrap();
        assert_eq!(rate, ThroughputRate::per_day(0.25));
    }

    #[test]
    fn windowed_empty_uses_floor() {
        let rate = windowed(&[], 30, now(), 0.25).unwrap();
        assert_eq!(rate, ThroughputRate::per_day(0.25));
        assert!(rate.is_defined());
    }

    #[test]
    fn windowed_rejects_zero_window() {
        assert!(matches!(
            windowed(&[], 0, now(), 0.25),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn windowed_rejects_window_past_earliest_date() {
        assert!(matches!(
            windowed(&[], u32::MAX, now(), 0.25),
            Err(ForecastError::InvalidInput(_))
        ));

        let earliest = DateTime::<Utc>::MIN_UTC + TimeDelta::days(3);
        assert!(matches!(
            windowed(&[], 30, earliest, 0.25),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn window_serializes_with_mode_tag() {
        let json = serde_json::to_string(&ThroughputWindow::Days { days: 30 }).unwrap();
        assert_eq!(json, r#"{"mode":"days","days":30}"#);
    }
}
