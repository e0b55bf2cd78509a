//! Review lifecycle states, reviewer actions, and UI hints.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ReviewState` carries the transition table; the store consults it before
//! every mutation so the edit lock cannot be bypassed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Review;
use crate::errors::PreconditionReason;

// ---------------------------------------------------------------------------
// ReviewState
// ---------------------------------------------------------------------------

/// Status of one `(reviewer, paper)` pair.
///
/// ```text
/// unreviewed --save--> saved --finalize--> finalized
///                      saved --save------> saved
///                  finalized --unfinalize-> saved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    Unreviewed,
    Saved,
    Finalized,
}

impl ReviewState {
    /// State implied by the stored record for a pair, if any.
    #[must_use]
    pub const fn of(record: Option<&Review>) -> Self {
        match record {
            None => Self::Unreviewed,
            Some(review) if review.finalized => Self::Finalized,
            Some(_) => Self::Saved,
        }
    }

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unreviewed | Self::Finalized => &[Self::Saved],
            Self::Saved => &[Self::Saved, Self::Finalized],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Apply a reviewer action, returning the resulting state or the reason it
    /// is refused.
    ///
    /// # Errors
    ///
    /// Returns the `PreconditionReason` that blocks `action` in this state.
    pub const fn apply(self, action: ReviewAction) -> Result<Self, PreconditionReason> {
        match (self, action) {
            (Self::Unreviewed | Self::Saved, ReviewAction::Save)
            | (Self::Finalized, ReviewAction::Unfinalize) => Ok(Self::Saved),
            (Self::Saved, ReviewAction::Finalize) => Ok(Self::Finalized),
            (Self::Finalized, ReviewAction::Save) => Err(PreconditionReason::Locked),
            (Self::Unreviewed, ReviewAction::Finalize) => Err(PreconditionReason::NotSaved),
            (Self::Finalized, ReviewAction::Finalize) => {
                Err(PreconditionReason::AlreadyFinalized)
            }
            (Self::Unreviewed | Self::Saved, ReviewAction::Unfinalize) => {
                Err(PreconditionReason::NotFinalized)
            }
        }
    }

    /// Whether edits (score selection, comment, save) are locked.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Finalized)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unreviewed => "unreviewed",
            Self::Saved => "saved",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReviewAction
// ---------------------------------------------------------------------------

/// A mutation a reviewer can request on a `(reviewer, paper)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Save,
    Finalize,
    Unfinalize,
}

impl ReviewAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Finalize => "finalize",
            Self::Unfinalize => "unfinalize",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionHint
// ---------------------------------------------------------------------------

/// Why an action is currently disabled. Rendered next to the actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionHint {
    NoReviewer,
    NoPapers,
    Locked,
    NoScore,
    NotSaved,
    UnsavedChanges,
}

impl ActionHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoReviewer => "no_reviewer",
            Self::NoPapers => "no_papers",
            Self::Locked => "locked",
            Self::NoScore => "no_score",
            Self::NotSaved => "not_saved",
            Self::UnsavedChanges => "unsaved_changes",
        }
    }

    /// Message shown to the reviewer.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoReviewer => "enter a reviewer name",
            Self::NoPapers => "load a paper CSV",
            Self::Locked => "finalized; unfinalize to edit",
            Self::NoScore => "select a score (1-5)",
            Self::NotSaved => "save before finalizing",
            Self::UnsavedChanges => {
                "the current score/comment differ from the saved review; save again"
            }
        }
    }
}

impl fmt::Display for ActionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
