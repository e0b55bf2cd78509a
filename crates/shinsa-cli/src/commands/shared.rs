use std::path::Path;

use anyhow::Context;
use shinsa_core::entities::Paper;

use crate::context::AppContext;

/// The explicit `--reviewer`, else the stored reviewer name.
pub fn resolve_reviewer(explicit: Option<&str>, ctx: &AppContext) -> String {
    explicit.map_or_else(
        || ctx.service.store().reviewer_name(),
        |name| name.trim().to_string(),
    )
}

/// Read, decode and parse a paper CSV. An empty paper list is an error.
pub fn read_papers(path: &Path) -> anyhow::Result<Vec<Paper>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    shinsa_csv::load_papers(&bytes).with_context(|| format!("failed to load {}", path.display()))
}
