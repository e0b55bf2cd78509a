//! Store error types.

use std::path::PathBuf;

use shinsa_core::errors::{CoreError, PreconditionReason};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain error, including refused reviewer actions.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a storage file failed.
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The review collection could not be serialized.
    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// The precondition reason, if a reviewer action was refused.
    #[must_use]
    pub const fn precondition_reason(&self) -> Option<PreconditionReason> {
        match self {
            Self::Core(core) => core.precondition_reason(),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<PreconditionReason> for StoreError {
    fn from(reason: PreconditionReason) -> Self {
        Self::Core(CoreError::precondition(reason))
    }
}
