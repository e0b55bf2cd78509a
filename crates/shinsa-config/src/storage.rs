//! Where persisted review state lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `<data_dir>/shinsa`, or `.shinsa/state` when the platform has no data dir.
fn default_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".shinsa").join("state"),
        |dir| dir.join("shinsa"),
    )
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the reviewer name and review collection blobs.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
