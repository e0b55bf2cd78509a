use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::{read_papers, resolve_reviewer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa stats`. Progress counters stay zero without `--papers`.
pub fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let papers = args
        .papers
        .as_deref()
        .map(read_papers)
        .transpose()?
        .unwrap_or_default();
    let reviewer = resolve_reviewer(args.reviewer.as_deref(), ctx);
    output(&ctx.service.stats(&reviewer, &papers), flags.format)
}
