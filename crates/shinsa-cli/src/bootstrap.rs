use anyhow::Context;
use shinsa_config::ShinsaConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ShinsaConfig> {
    let mut config = ShinsaConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(dir) = &flags.storage {
        config.storage.dir.clone_from(dir);
    }
    tracing::debug!(storage = %config.storage.dir.display(), "configuration loaded");
    Ok(config)
}
