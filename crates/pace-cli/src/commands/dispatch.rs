use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a snapshot-backed command to its handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Throughput(args) => commands::throughput::handle(args, ctx, flags),
        Commands::ForecastItem(args) => commands::forecast_item::handle(args, ctx, flags),
        Commands::TeamLoad(args) => commands::team_load::handle(args, ctx, flags),
        Commands::Project(args) => commands::project::handle(args, ctx, flags),
        Commands::Variance(_) | Commands::Schema(_) => {
            unreachable!("variance/schema are pre-dispatched in main")
        }
    }
}
