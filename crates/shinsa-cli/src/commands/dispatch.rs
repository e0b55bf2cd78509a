use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Reviewer { action } => commands::reviewer::handle(&action, ctx, flags),
        Commands::Save(args) => commands::review::save(&args, ctx, flags),
        Commands::Finalize(args) => commands::review::finalize(&args, ctx, flags),
        Commands::Unfinalize(args) => commands::review::unfinalize(&args, ctx, flags),
        Commands::Status(args) => commands::status::handle(&args, ctx, flags),
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Presets => commands::presets::handle(ctx, flags).await,
        Commands::Reset(args) => commands::reset::handle(&args, ctx, flags),
        Commands::Desk(args) => commands::desk::handle(&args, ctx, flags).await,
        Commands::Parse(args) => commands::parse::handle(&args, flags),
        Commands::InspectExport(args) => commands::inspect::handle(&args, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
