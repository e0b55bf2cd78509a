use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa presets`. An unavailable feed prints an empty list.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let presets = ctx.presets.load_or_empty(&ctx.config.presets.source).await;
    output(&presets, flags.format)
}
