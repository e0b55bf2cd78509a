use shinsa_core::entities::{Review, Score};
use shinsa_core::enums::ReviewState;
use shinsa_core::responses::TransitionResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SaveArgs, TargetArgs};
use crate::commands::shared::resolve_reviewer;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa save`.
pub fn save(args: &SaveArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let score = Score::new(args.score)?;
    let reviewer = resolve_reviewer(args.target.reviewer.as_deref(), ctx);
    let review = ctx.service.save(
        &reviewer,
        &args.target.paper,
        Some(score),
        args.comment.as_deref().unwrap_or_default(),
    )?;
    respond(review, flags)
}

/// Handle `shinsa finalize`.
pub fn finalize(args: &TargetArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reviewer = resolve_reviewer(args.reviewer.as_deref(), ctx);
    let review = ctx.service.finalize(&reviewer, &args.paper)?;
    respond(review, flags)
}

/// Handle `shinsa unfinalize`.
pub fn unfinalize(
    args: &TargetArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reviewer = resolve_reviewer(args.reviewer.as_deref(), ctx);
    let review = ctx.service.unfinalize(&reviewer, &args.paper)?;
    respond(review, flags)
}

fn respond(review: Review, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ReviewState::of(Some(&review));
    output(&TransitionResponse { review, state }, flags.format)
}
