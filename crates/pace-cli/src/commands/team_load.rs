use crate::cli::GlobalFlags;
use crate::cli::root_commands::TeamLoadArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pace team-load`.
pub fn handle(args: &TeamLoadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let load = ctx.service().team_load(&args.team)?;
    output(&load, flags.format)
}
