use chrono::NaiveDate;
use pace_core::enums::{ForecastStatus, VarianceStatus};
use pace_core::responses::{ObjectiveForecast, ProjectForecast};
use serde::Serialize;

use crate::cli::root_commands::ProjectArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Flattened objective line for table output.
#[derive(Debug, Serialize)]
struct ObjectiveRow<'a> {
    objective: &'a str,
    parent: Option<&'a str>,
    lead_time_days: Option<i64>,
    calculated_date: Option<NaiveDate>,
    target_date: Option<NaiveDate>,
    variance_days: Option<i64>,
    variance: Option<VarianceStatus>,
    forecast: ForecastStatus,
    critical: bool,
}

fn rows(forecast: &ProjectForecast) -> Vec<ObjectiveRow<'_>> {
    let critical = |objective: &ObjectiveForecast| {
        forecast
            .critical_path_objective_ids
            .contains(&objective.objective_id)
    };
    forecast
        .objective_forecasts
        .iter()
        .map(|objective| ObjectiveRow {
            objective: &objective.objective_id,
            parent: objective.parent_objective_id.as_deref(),
            lead_time_days: objective.total_lead_time_days,
            calculated_date: objective.calculated_date,
            target_date: objective.target_date,
            variance_days: objective.variance.map(|v| v.variance_days),
            variance: objective.variance.map(|v| v.status),
            forecast: objective.status,
            critical: critical(objective),
        })
        .collect()
}

/// Handle `pace project`.
pub fn handle(args: &ProjectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let forecast = ctx.service().project_forecast(&args.project_id)?;

    for flagged in forecast.flagged() {
        tracing::warn!(
            objective_id = %flagged.objective_id,
            status = %flagged.status,
            issues = flagged.issues.len(),
            "objective forecast is incomplete"
        );
    }

    match flags.format {
        OutputFormat::Table => output(&rows(&forecast), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&forecast, flags.format),
    }
}
