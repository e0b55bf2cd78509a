//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory `shinsa export` writes into when `--out` is not given.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
        }
    }
}
