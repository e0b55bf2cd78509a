//! Integration tests for configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use shinsa_config::{ConfigError, ShinsaConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/shinsa"

[presets]
source = "https://example.org/presets.json"
timeout_secs = 3

[general]
export_dir = "out"
"#,
        )?;

        let config: ShinsaConfig = Figment::from(Serialized::defaults(ShinsaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.dir, PathBuf::from("/var/lib/shinsa"));
        assert_eq!(config.presets.source, "https://example.org/presets.json");
        assert_eq!(config.presets.timeout_secs, 3);
        assert!(config.presets.is_remote());
        assert_eq!(config.general.export_dir, PathBuf::from("out"));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shinsa")?;
        jail.create_file(
            ".shinsa/config.toml",
            r#"
[presets]
source = "presets.json"
"#,
        )?;

        let config = ShinsaConfig::load().expect("config loads");
        assert_eq!(config.presets.source, "presets.json");
        assert_eq!(config.presets.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shinsa")?;
        jail.create_file(".shinsa/config.toml", "[storage]\ndir = \"from-file\"\n")?;
        jail.set_env("SHINSA_STORAGE__DIR", "from-env");
        jail.set_env("SHINSA_PRESETS__TIMEOUT_SECS", "30");

        let config = ShinsaConfig::load().expect("config loads");
        assert_eq!(config.storage.dir, PathBuf::from("from-env"));
        assert_eq!(config.presets.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn invalid_timeout_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("SHINSA_PRESETS__TIMEOUT_SECS", "0");
        let err = ShinsaConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_value_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("SHINSA_PRESETS__TIMEOUT_SECS", "soon");
        let err = ShinsaConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
