//! Preset comment feed configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetsConfig {
    /// `http(s)://` URL or filesystem path of the feed. Empty disables presets.
    #[serde(default)]
    pub source: String,

    /// Request timeout for URL sources, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            source: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PresetsConfig {
    pub fn is_configured(&self) -> bool {
        !self.source.trim().is_empty()
    }

    /// Whether the source should be fetched over HTTP rather than read from disk.
    pub fn is_remote(&self) -> bool {
        let source = self.source.trim();
        source.starts_with("http://") || source.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = PresetsConfig::default();
        assert!(!config.is_configured());
        assert!(!config.is_remote());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn remote_detection() {
        let mut config = PresetsConfig {
            source: " https://example.org/presets.json".into(),
            ..Default::default()
        };
        assert!(config.is_remote());

        config.source = "./presets.json".into();
        assert!(config.is_configured());
        assert!(!config.is_remote());
    }
}
