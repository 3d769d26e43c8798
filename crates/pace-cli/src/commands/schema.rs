use pace_core::responses::{ItemForecast, ProjectForecast, TeamLoad};
use pace_core::snapshot::Snapshot;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `pace schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Snapshot => schema_for!(Snapshot),
        SchemaKind::ProjectForecast => schema_for!(ProjectForecast),
        SchemaKind::ItemForecast => schema_for!(ItemForecast),
        SchemaKind::TeamLoad => schema_for!(TeamLoad),
    };
    output(&schema, flags.format)
}
