//! Derived action availability.
//!
//! A pure function of the session and the stored record for the current
//! `(reviewer, paper)` pair. Renderers call it after every event; it never
//! touches storage itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Review;
use crate::enums::{ActionHint, ReviewState};
use crate::session::SessionState;

/// Which reviewer actions are enabled right now.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionAvailability {
    pub can_save: bool,
    pub can_finalize: bool,
    pub can_unfinalize: bool,
    /// Reasons for disabled actions, in evaluation order.
    pub hints: Vec<ActionHint>,
}

/// Compute action availability.
///
/// `record` must be the stored review for `(session.reviewer(), current paper id)`.
///
/// Finalize is only offered when the stored record exactly matches the pending
/// score and trimmed comment, so stale or unsaved edits can never be locked in.
#[must_use]
pub fn derive_action_availability(
    session: &SessionState,
    record: Option<&Review>,
) -> ActionAvailability {
    let mut hints = Vec::new();
    if session.reviewer().is_empty() {
        hints.push(ActionHint::NoReviewer);
    }
    if !session.has_papers() {
        hints.push(ActionHint::NoPapers);
    }
    if !hints.is_empty() {
        return ActionAvailability {
            hints,
            ..ActionAvailability::default()
        };
    }

    if ReviewState::of(record).is_locked() {
        return ActionAvailability {
            can_save: false,
            can_finalize: false,
            can_unfinalize: true,
            hints: vec![ActionHint::Locked],
        };
    }

    let can_save = session.pending_score().is_some();
    if !can_save {
        hints.push(ActionHint::NoScore);
    }

    let can_finalize = match record {
        None => {
            hints.push(ActionHint::NotSaved);
            false
        }
        Some(review) => {
            let matches = !review.finalized
                && review.score == session.pending_score()
                && review.comment.trim() == session.pending_comment().trim();
            if !matches {
                hints.push(ActionHint::UnsavedChanges);
            }
            matches
        }
    };

    ActionAvailability {
        can_save,
        can_finalize,
        can_unfinalize: false,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::{Paper, Score};

    fn session_with_paper() -> SessionState {
        let mut session = SessionState::new("Ann");
        session.load_papers(vec![Paper {
            id: "1".into(),
            title: "Hello".into(),
            ..Paper::default()
        }]);
        session
    }

    fn review(score: u8, comment: &str, finalized: bool) -> Review {
        Review {
            reviewer: "Ann".into(),
            paper_id: "1".into(),
            score: Some(Score::new(i64::from(score)).unwrap()),
            comment: comment.into(),
            timestamp: Utc::now(),
            finalized,
        }
    }

    #[test]
    fn nothing_enabled_without_reviewer_or_papers() {
        let session = SessionState::new("   ");
        let availability = derive_action_availability(&session, None);
        assert_eq!(
            availability,
            ActionAvailability {
                can_save: false,
                can_finalize: false,
                can_unfinalize: false,
                hints: vec![ActionHint::NoReviewer, ActionHint::NoPapers],
            }
        );
    }

    #[test]
    fn fresh_paper_needs_score_then_save() {
        let mut session = session_with_paper();
        let availability = derive_action_availability(&session, None);
        assert!(!availability.can_save);
        assert!(!availability.can_finalize);
        assert_eq!(
            availability.hints,
            vec![ActionHint::NoScore, ActionHint::NotSaved]
        );

        session.select_score(Score::new(4).unwrap());
        let availability = derive_action_availability(&session, None);
        assert!(availability.can_save);
        assert!(!availability.can_finalize);
    }

    #[test]
    fn finalize_requires_exact_match_with_saved_record() {
        let mut session = session_with_paper();
        session.select_score(Score::new(4).unwrap());
        session.set_comment(" ok ");
        let saved = review(4, "ok", false);

        let availability = derive_action_availability(&session, Some(&saved));
        assert!(availability.can_save);
        assert!(availability.can_finalize);
        assert!(!availability.can_unfinalize);
        assert!(availability.hints.is_empty());

        session.set_comment("ok, but");
        let availability = derive_action_availability(&session, Some(&saved));
        assert!(!availability.can_finalize);
        assert_eq!(availability.hints, vec![ActionHint::UnsavedChanges]);

        session.set_comment("ok");
        session.select_score(Score::new(5).unwrap());
        let availability = derive_action_availability(&session, Some(&saved));
        assert!(!availability.can_finalize);
    }

    #[test]
    fn finalized_record_only_allows_unfinalize() {
        let mut session = session_with_paper();
        session.select_score(Score::new(4).unwrap());
        let locked = review(4, "", true);
        let availability = derive_action_availability(&session, Some(&locked));
        assert_eq!(
            availability,
            ActionAvailability {
                can_save: false,
                can_finalize: false,
                can_unfinalize: true,
                hints: vec![ActionHint::Locked],
            }
        );
    }
}
