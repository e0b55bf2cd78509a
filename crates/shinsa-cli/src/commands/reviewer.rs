use shinsa_core::responses::ReviewerResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewerCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa reviewer`.
pub fn handle(
    action: &ReviewerCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reviewer = match action {
        ReviewerCommands::Show => ctx.service.store().reviewer_name(),
        ReviewerCommands::Set { name } => ctx.service.store_mut().set_reviewer_name(name)?,
    };
    output(&ReviewerResponse { reviewer }, flags.format)
}
