//! Feed loading from file sources and failure degradation.

use std::time::Duration;

use pretty_assertions::assert_eq;
use shinsa_presets::{PresetClient, PresetError};
use tempfile::TempDir;

fn client() -> PresetClient {
    PresetClient::new(Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn reads_presets_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comment.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "text": "Well structured."}, {"id": 2, "text": "Needs data."}]"#,
    )
    .unwrap();

    let presets = client().fetch(path.to_str().unwrap()).await.unwrap();
    let texts: Vec<_> = presets.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["Well structured.", "Needs data."]);
}

#[tokio::test]
async fn empty_source_means_no_presets() {
    assert!(client().fetch("  ").await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = client().fetch(path.to_str().unwrap()).await.unwrap_err();
    assert!(matches!(err, PresetError::Io { .. }));
}

#[tokio::test]
async fn failures_degrade_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(client().load_or_empty(path.to_str().unwrap()).await.is_empty());
    // Nothing listens on port 9 of the loopback interface.
    assert!(client().load_or_empty("http://127.0.0.1:9/presets.json").await.is_empty());
}
