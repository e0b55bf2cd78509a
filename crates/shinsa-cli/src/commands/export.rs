use std::path::{Path, PathBuf};

use anyhow::Context;
use shinsa_core::responses::ExportResponse;
use shinsa_store::ExportFile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::resolve_reviewer;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shinsa export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reviewer = resolve_reviewer(args.reviewer.as_deref(), ctx);
    let file = ctx.service.export(&reviewer)?;
    let dir = args
        .out
        .as_deref()
        .unwrap_or(ctx.config.general.export_dir.as_path());
    let path = write_export(&file, dir)?;
    let response = ExportResponse {
        reviewer,
        path: path.display().to_string(),
        rows: file.rows,
    };
    output(&response, flags.format)
}

/// Write `file` into `dir` under its suggested name. Returns the full path.
pub fn write_export(file: &ExportFile, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = file.rows, "export written");
    Ok(path)
}
