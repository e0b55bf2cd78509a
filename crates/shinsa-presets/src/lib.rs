//! # shinsa-presets
//!
//! Loads the preset comment feed: a JSON array of `{"id": …, "text": …}`
//! records, served over HTTP or stored as a local file. The feed is optional;
//! [`PresetClient::load_or_empty`] turns every failure into a logged warning
//! and an empty list.

mod error;
mod http;

pub use error::PresetError;

use std::path::Path;
use std::time::Duration;

use shinsa_core::entities::CommentPreset;

use crate::http::check_response;

/// Parse a feed body.
///
/// # Errors
///
/// [`PresetError::Parse`] if the body is not an array of preset records.
pub fn parse_presets(body: &str) -> Result<Vec<CommentPreset>, PresetError> {
    Ok(serde_json::from_str(body)?)
}

/// Client for the preset comment feed.
pub struct PresetClient {
    http: reqwest::Client,
}

impl PresetClient {
    /// Build a client whose HTTP requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// [`PresetError::Http`] if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, PresetError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("shinsa/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch presets from `source`: an `http(s)://` URL or a file path.
    /// An empty source yields no presets.
    ///
    /// # Errors
    ///
    /// Transport, status, I/O or parse failures.
    pub async fn fetch(&self, source: &str) -> Result<Vec<CommentPreset>, PresetError> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(Vec::new());
        }
        let body = if source.starts_with("http://") || source.starts_with("https://") {
            let resp = check_response(self.http.get(source).send().await?).await?;
            resp.text().await?
        } else {
            read_file(Path::new(source)).await?
        };
        let presets = parse_presets(&body)?;
        tracing::debug!(source, count = presets.len(), "preset feed loaded");
        Ok(presets)
    }

    /// Like [`Self::fetch`], but failures are logged and yield an empty list.
    pub async fn load_or_empty(&self, source: &str) -> Vec<CommentPreset> {
        self.fetch(source).await.unwrap_or_else(|error| {
            tracing::warn!(source, %error, "preset feed unavailable");
            Vec::new()
        })
    }
}

async fn read_file(path: &Path) -> Result<String, PresetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })
}
