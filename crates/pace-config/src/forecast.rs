//! Forecasting knobs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rolling window for windowed throughput.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Items/day assumed when a team completed nothing inside the window.
pub const DEFAULT_THROUGHPUT_FLOOR_PER_DAY: f64 = 0.25;

const fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

const fn default_throughput_floor() -> f64 {
    DEFAULT_THROUGHPUT_FLOOR_PER_DAY
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    /// Days of history counted by the windowed throughput mode.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Floor rate (items/day) used when the window holds no completions.
    #[serde(default = "default_throughput_floor")]
    pub throughput_floor_per_day: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            throughput_floor_per_day: default_throughput_floor(),
        }
    }
}

impl ForecastConfig {
    /// Reject values that would make lead times undefined.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero window or a floor
    /// that is not a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast.window_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !self.throughput_floor_per_day.is_finite() || self.throughput_floor_per_day <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast.throughput_floor_per_day".into(),
                reason: format!(
                    "must be a positive number, got {}",
                    self.throughput_floor_per_day
                ),
            });
        }
        Ok(())
    }
}
