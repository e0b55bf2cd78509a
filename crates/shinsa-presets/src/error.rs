//! Preset feed error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed server returned a non-success status code.
    #[error("feed returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A file source could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed body is not a JSON array of `{id, text}` records.
    #[error("malformed preset feed: {0}")]
    Parse(#[from] serde_json::Error),
}
