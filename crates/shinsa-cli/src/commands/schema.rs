use schemars::schema_for;
use shinsa_core::entities::{CommentPreset, Paper, Review};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `shinsa schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Review => schema_for!(Review),
        SchemaType::Paper => schema_for!(Paper),
        SchemaType::Preset => schema_for!(CommentPreset),
        SchemaType::ReviewsBlob => schema_for!(Vec<Review>),
    };
    output(&schema, flags.format)
}
