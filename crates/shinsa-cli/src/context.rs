use std::time::Duration;

use anyhow::Context;
use shinsa_config::ShinsaConfig;
use shinsa_presets::PresetClient;
use shinsa_store::{FileKvStore, ReviewService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ShinsaConfig,
    pub service: ReviewService<FileKvStore>,
    pub presets: PresetClient,
}

impl AppContext {
    pub fn init(config: ShinsaConfig) -> anyhow::Result<Self> {
        let service = Self::service_for(&config);
        let presets = PresetClient::new(Duration::from_secs(config.presets.timeout_secs))
            .context("failed to build preset feed client")?;
        Ok(Self {
            config,
            service,
            presets,
        })
    }

    /// A second service over the same storage directory. Every query reloads
    /// from disk, so both handles stay consistent.
    pub fn open_service(&self) -> ReviewService<FileKvStore> {
        Self::service_for(&self.config)
    }

    fn service_for(config: &ShinsaConfig) -> ReviewService<FileKvStore> {
        ReviewService::new(FileKvStore::new(&config.storage.dir))
    }
}
