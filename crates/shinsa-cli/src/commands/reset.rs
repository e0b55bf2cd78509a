use anyhow::bail;
use shinsa_core::responses::ResetResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa reset`.
pub fn handle(args: &ResetArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes {
        bail!("reset deletes every stored review of every reviewer; pass --yes to confirm");
    }
    let removed = ctx.service.reset()?;
    output(&ResetResponse { removed }, flags.format)
}
