use shinsa_core::responses::ImportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::commands::shared::read_papers;
use crate::output::output;

/// Handle `shinsa parse`.
pub fn handle(args: &ParseArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let papers = read_papers(&args.file)?;
    let response = ImportResponse {
        source: args.file.display().to_string(),
        count: papers.len(),
        papers,
    };
    output(&response, flags.format)
}
