use pace_forecast::variance;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VarianceArgs;
use crate::output::output;

/// Handle `pace variance`.
pub fn handle(args: &VarianceArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&variance::classify(args.calculated, args.target), flags.format)
}
