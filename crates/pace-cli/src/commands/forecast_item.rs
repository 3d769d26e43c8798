use crate::cli::GlobalFlags;
use crate::cli::root_commands::ForecastItemArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pace forecast-item`.
pub fn handle(
    args: &ForecastItemArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let forecast = ctx.service().forecast_item(&args.item_id, None)?;
    output(&forecast, flags.format)
}
