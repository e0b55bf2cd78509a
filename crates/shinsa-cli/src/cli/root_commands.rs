use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::ReviewerCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Decode and parse a paper CSV.
    Parse(ParseArgs),
    /// Show or change the reviewer name.
    Reviewer {
        #[command(subcommand)]
        action: ReviewerCommands,
    },
    /// Save a score and comment for a paper.
    Save(SaveArgs),
    /// Lock a saved review.
    Finalize(TargetArgs),
    /// Unlock a finalized review.
    Unfinalize(TargetArgs),
    /// Per-paper review state for a paper list.
    Status(StatusArgs),
    /// Score distribution and progress counters.
    Stats(StatsArgs),
    /// Write the submission CSV for a reviewer.
    Export(ExportArgs),
    /// Read an exported submission CSV back into rows.
    InspectExport(InspectArgs),
    /// List the preset comment feed.
    Presets,
    /// Delete all stored reviews.
    Reset(ResetArgs),
    /// Dump JSON schema for a type.
    Schema(SchemaArgs),
    /// Interactive review session.
    Desk(DeskArgs),
}

/// Arguments for `shinsa parse`.
#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// Paper CSV (`id,title,abstract[,section]`).
    pub file: PathBuf,
}

/// Paper and reviewer a review command acts on.
#[derive(Clone, Debug, Args)]
pub struct TargetArgs {
    /// Paper id.
    #[arg(long)]
    pub paper: String,
    /// Reviewer name (defaults to the stored name).
    #[arg(long)]
    pub reviewer: Option<String>,
}

/// Arguments for `shinsa save`.
#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Score, 1 to 5.
    #[arg(long)]
    pub score: i64,
    /// Free-text comment.
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for `shinsa status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Paper CSV.
    #[arg(long)]
    pub papers: PathBuf,
    /// Case-insensitive filter over id, title and abstract.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub reviewer: Option<String>,
}

/// Arguments for `shinsa stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Paper CSV for the progress counters.
    #[arg(long)]
    pub papers: Option<PathBuf>,
    #[arg(long)]
    pub reviewer: Option<String>,
}

/// Arguments for `shinsa export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub reviewer: Option<String>,
    /// Output directory (defaults to `general.export_dir`).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `shinsa inspect-export`.
#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    pub file: PathBuf,
}

/// Arguments for `shinsa reset`.
#[derive(Clone, Debug, Args)]
pub struct ResetArgs {
    /// Confirm deletion of every stored review.
    #[arg(long)]
    pub yes: bool,
}

/// Types with a published JSON schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Review,
    Paper,
    Preset,
    #[value(name = "reviews_blob")]
    ReviewsBlob,
}

/// Arguments for `shinsa schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Arguments for `shinsa desk`.
#[derive(Clone, Debug, Args)]
pub struct DeskArgs {
    /// Paper CSV to load on start.
    #[arg(long)]
    pub papers: Option<PathBuf>,
}
