//! Cross-cutting error types for shinsa.
//!
//! Domain-specific errors (`CsvError`, `StoreError`, `PresetError`) live in
//! their own crates. Precondition failures are defined here because both the
//! store and the CLI need to recognise them: they are reported to the reviewer
//! and never end the session.

use std::fmt;

use thiserror::Error;

/// Why a reviewer action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreconditionReason {
    /// No reviewer name has been entered.
    MissingReviewer,
    /// Save was requested without a selected score.
    MissingScore,
    /// No paper list is loaded.
    NoPapers,
    /// The paper is finalized for this reviewer; edits are locked.
    Locked,
    /// Finalize was requested but no review has been saved yet.
    NotSaved,
    /// Finalize was requested while the pending score or comment differs
    /// from the saved review.
    UnsavedChanges,
    /// Finalize was requested on a review that is already finalized.
    AlreadyFinalized,
    /// Unfinalize was requested on a review that is not finalized.
    NotFinalized,
    /// Export was requested but the reviewer has no stored reviews.
    NoReviewsToExport,
}

impl PreconditionReason {
    /// Message shown to the reviewer.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingReviewer => "enter a reviewer name first",
            Self::MissingScore => "select a score (1-5) first",
            Self::NoPapers => "no papers are loaded; import a paper CSV first",
            Self::Locked => {
                "this paper is finalized and locked for editing; unfinalize it before editing"
            }
            Self::NotSaved => "save a score and comment before finalizing",
            Self::UnsavedChanges => {
                "the pending score or comment differs from the saved review; save before finalizing"
            }
            Self::AlreadyFinalized => "this review is already finalized",
            Self::NotFinalized => "this paper has no finalized review to unfinalize",
            Self::NoReviewsToExport => "this reviewer has no saved reviews yet",
        }
    }
}

impl fmt::Display for PreconditionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors that can be raised by any shinsa crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A reviewer action was refused; state is unchanged.
    #[error("Precondition failed: {reason}")]
    Precondition { reason: PreconditionReason },

    /// A score outside `1..=5`.
    #[error("Invalid score {0}: expected an integer from 1 to 5")]
    InvalidScore(i64),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub const fn precondition(reason: PreconditionReason) -> Self {
        Self::Precondition { reason }
    }

    /// The precondition reason, if this is a precondition failure.
    #[must_use]
    pub const fn precondition_reason(&self) -> Option<PreconditionReason> {
        match self {
            Self::Precondition { reason } => Some(*reason),
            _ => None,
        }
    }
}
