use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::{read_papers, resolve_reviewer};
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa status`.
pub fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let papers = read_papers(&args.papers)?;
    let reviewer = resolve_reviewer(args.reviewer.as_deref(), ctx);
    let rows = ctx
        .service
        .paper_statuses(&reviewer, &papers, args.search.as_deref());
    output(&rows, flags.format)
}
