//! Request/response facade over a [`ForecastSource`].
//!
//! One service is built per request with a single captured
//! [`ForecastContext`], so every answer it gives shares the same "today".

use pace_core::errors::CoreError;
use pace_core::responses::{ItemForecast, ProjectForecast, TeamLeadTime, TeamLoad, ThroughputRate};
use pace_core::stores::ForecastSource;

use crate::context::ForecastContext;
use crate::error::ForecastError;
use crate::lead_time::{self, LeadTimeInput};
use crate::queue;
use crate::rollup;
use crate::throughput::{self, ThroughputWindow};

pub struct ForecastService<'a, S: ForecastSource + ?Sized> {
    source: &'a S,
    ctx: ForecastContext,
}

impl<'a, S: ForecastSource + ?Sized> ForecastService<'a, S> {
    pub const fn new(source: &'a S, ctx: ForecastContext) -> Self {
        Self { source, ctx }
    }

    #[must_use]
    pub const fn context(&self) -> &ForecastContext {
        &self.ctx
    }

    /// Throughput of `team_id` over the requested window.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError`] for negative bucket counts or a zero-day window.
    pub fn throughput(
        &self,
        team_id: &str,
        window: ThroughputWindow,
    ) -> Result<ThroughputRate, ForecastError> {
        match window {
            ThroughputWindow::Buckets { last } => {
                let counts = self.source.weekly_counts(team_id);
                throughput::bucketed(throughput::recent_buckets(counts, last))
            }
            ThroughputWindow::Days { days } => throughput::windowed(
                self.source.completions(team_id),
                days,
                self.ctx.now(),
                self.ctx.settings().throughput_floor_per_day,
            ),
        }
    }

    /// Forecast one backlog item against its team's queue.
    ///
    /// Without an explicit `throughput`, the team's bucketed weekly rate is
    /// used. Unknown items yield the `unknown` forecast.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NegativeCount`] for corrupt weekly history.
    pub fn forecast_item(
        &self,
        item_id: &str,
        throughput: Option<ThroughputRate>,
    ) -> Result<ItemForecast, ForecastError> {
        let Some(item) = self.source.item(item_id) else {
            tracing::debug!(item_id, "item not found in backlog store");
            return Ok(ItemForecast::unknown(item_id, None));
        };

        let rate = match throughput {
            Some(rate) => rate,
            None => throughput::bucketed(self.source.weekly_counts(&item.team_id))?,
        };
        let backlog = self.source.backlog(&item.team_id);
        Ok(queue::forecast_item(item_id, &backlog, rate, self.ctx.today()))
    }

    /// Cumulative P1 / P1+P2 / total load of a team, in weeks.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NegativeCount`] for corrupt weekly history.
    pub fn team_load(&self, team_id: &str) -> Result<TeamLoad, ForecastError> {
        let rate = throughput::bucketed(self.source.weekly_counts(team_id))?;
        let backlog = self.source.backlog(team_id);
        Ok(queue::team_load(team_id, &backlog, rate))
    }

    /// Lead time for adding `new_item_count` items to a team's queue behind
    /// the given predecessor lead times.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidInput`] for an invalid window setting.
    pub fn team_lead_time(
        &self,
        team_id: &str,
        new_item_count: u32,
        dependency_lead_times: &[f64],
    ) -> Result<TeamLeadTime, ForecastError> {
        let backlog = self.source.backlog(team_id);
        lead_time::team_lead_time(
            &LeadTimeInput {
                team_id,
                new_item_count,
                backlog: &backlog,
                history: self.source.completions(team_id),
                dependency_lead_times,
            },
            &self.ctx,
        )
    }

    /// Roll up a whole project.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] (wrapped) for an unknown project, or
    /// [`ForecastError`] for invalid project data.
    pub fn project_forecast(&self, project_id: &str) -> Result<ProjectForecast, ForecastError> {
        let project = self
            .source
            .project(project_id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "project".into(),
                id: project_id.into(),
            })?;
        rollup::project_forecast(project, self.source, &self.ctx)
    }
}
