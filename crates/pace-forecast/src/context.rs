//! The single "now" and the settings threaded through one forecast call.

use chrono::{DateTime, Days, NaiveDate, Utc};
use pace_config::{DEFAULT_THROUGHPUT_FLOOR_PER_DAY, DEFAULT_WINDOW_DAYS, ForecastConfig};

/// Tunables for the windowed throughput mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSettings {
    pub window_days: u32,
    pub throughput_floor_per_day: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            throughput_floor_per_day: DEFAULT_THROUGHPUT_FLOOR_PER_DAY,
        }
    }
}

impl From<&ForecastConfig> for ForecastSettings {
    fn from(config: &ForecastConfig) -> Self {
        Self {
            window_days: config.window_days,
            throughput_floor_per_day: config.throughput_floor_per_day,
        }
    }
}

/// Captured once per request and passed to every function in the call tree,
/// so a rollup that straddles midnight still uses one "today".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastContext {
    now: DateTime<Utc>,
    settings: ForecastSettings,
}

impl ForecastContext {
    #[must_use]
    pub const fn new(now: DateTime<Utc>, settings: ForecastSettings) -> Self {
        Self { now, settings }
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    #[must_use]
    pub const fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// `today + days` calendar days. `None` for negative or out-of-range counts.
    #[must_use]
    pub fn date_after(&self, days: i64) -> Option<NaiveDate> {
        let days = u64::try_from(days).ok()?;
        self.today().checked_add_days(Days::new(days))
    }
}
