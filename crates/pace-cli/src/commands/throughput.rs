use pace_core::responses::ThroughputRate;
use pace_core::stores::ForecastSource;
use pace_forecast::ThroughputWindow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ThroughputArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ThroughputResponse<'a> {
    team_id: &'a str,
    window: ThroughputWindow,
    #[serde(flatten)]
    rate: ThroughputRate,
    per_day: f64,
    per_week: f64,
}

/// Handle `pace throughput`.
pub fn handle(args: &ThroughputArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let window = if args.weekly {
        ThroughputWindow::Buckets { last: args.last }
    } else {
        ThroughputWindow::Days {
            days: args
                .window_days
                .unwrap_or(ctx.config.forecast.window_days),
        }
    };

    if !ctx.snapshot.knows_team(&args.team) {
        tracing::warn!(team_id = %args.team, "team not present in snapshot");
    }

    let rate = ctx.service().throughput(&args.team, window)?;
    let response = ThroughputResponse {
        team_id: &args.team,
        window,
        rate,
        per_day: pace_forecast::round_to(rate.daily(), 2),
        per_week: pace_forecast::round_to(rate.weekly(), 2),
    };
    output(&response, flags.format)
}
