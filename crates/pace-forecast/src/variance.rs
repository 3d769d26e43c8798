//! Variance of a calculated date against its target.

use chrono::NaiveDate;
use pace_core::enums::VarianceStatus;
use pace_core::responses::Variance;

/// Largest variance (days late) still classified as `at_risk`.
pub const AT_RISK_MAX_DAYS: i64 = 5;

/// Classify a signed day variance.
#[must_use]
pub const fn classify_days(variance_days: i64) -> Variance {
    let status = if variance_days > AT_RISK_MAX_DAYS {
        VarianceStatus::Critical
    } else if variance_days > 0 {
        VarianceStatus::AtRisk
    } else {
        VarianceStatus::OnTrack
    };

    Variance {
        variance_days,
        status,
        is_late: variance_days > 0,
    }
}

/// Variance between two calendar dates.
#[must_use]
pub fn classify(calculated: NaiveDate, target: NaiveDate) -> Variance {
    classify_days((calculated - target).num_days())
}
