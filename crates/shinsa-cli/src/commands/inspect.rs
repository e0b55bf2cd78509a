use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::output::output;

/// Handle `shinsa inspect-export`.
pub fn handle(args: &InspectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let reviews = shinsa_csv::parse_export(&bytes)
        .with_context(|| format!("{} is not a shinsa export", args.file.display()))?;
    output(&reviews, flags.format)
}
