//! Rounding rules shared by every day and week count.

/// Values this close to an integer are treated as that integer before
/// ceiling, so `5 / (2.5 / 7)` stays 14 rather than drifting to 15.
const SNAP_EPSILON: f64 = 1e-9;

/// Conservative day rounding: a partial day still consumes a calendar day.
///
/// Returns `None` for `NaN` or infinite input.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ceil_days(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let nearest = value.round();
    let ceiled = if (value - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        value.ceil()
    };
    Some(ceiled as i64)
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
