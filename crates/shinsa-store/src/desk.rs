//! Review desk: the single owner of a review session.
//!
//! Wraps a [`SessionState`] and a [`ReviewService`] so that navigation, score
//! selection and the save/finalize/unfinalize actions keep the pending edits
//! and the persisted record consistent. Front ends (the interactive CLI desk,
//! tests) only call methods here and render [`DeskView`].

use shinsa_core::availability::ActionAvailability;
use shinsa_core::entities::{CommentPreset, Paper, Review, Score};
use shinsa_core::enums::{ReviewAction, ReviewState};
use shinsa_core::errors::PreconditionReason;
use shinsa_core::responses::{DeskView, PaperStatusRow, ReviewStats};
use shinsa_core::session::SessionState;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::kv::KvStore;
use crate::service::{ExportFile, ReviewService};

pub struct ReviewDesk<S, C = SystemClock> {
    session: SessionState,
    service: ReviewService<S, C>,
    presets: Vec<CommentPreset>,
}

impl<S: KvStore, C: Clock> ReviewDesk<S, C> {
    /// Open a desk, restoring the last-used reviewer name from the store.
    pub fn open(service: ReviewService<S, C>) -> Self {
        let reviewer = service.store().reviewer_name();
        Self {
            session: SessionState::new(reviewer),
            service,
            presets: Vec::new(),
        }
    }

    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    pub const fn service(&self) -> &ReviewService<S, C> {
        &self.service
    }

    pub fn presets(&self) -> &[CommentPreset] {
        &self.presets
    }

    pub fn set_presets(&mut self, presets: Vec<CommentPreset>) {
        self.presets = presets;
    }

    /// Change and persist the reviewer, then reload pending edits for the
    /// current paper under the new name.
    ///
    /// # Errors
    ///
    /// Storage failure.
    pub fn set_reviewer(&mut self, name: &str) -> Result<(), StoreError> {
        let stored = self.service.store_mut().set_reviewer_name(name)?;
        self.session.set_reviewer(stored);
        self.restore_pending();
        Ok(())
    }

    /// Replace the paper list and show the first paper.
    pub fn load_papers(&mut self, papers: Vec<Paper>) {
        self.session.load_papers(papers);
        self.restore_pending();
    }

    /// Drop all papers, e.g. after a failed import.
    pub fn clear_papers(&mut self) {
        self.session.load_papers(Vec::new());
    }

    /// Jump to a zero-based position. Returns `false` when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        let moved = self.session.go_to(index);
        if moved {
            self.restore_pending();
        }
        moved
    }

    pub fn next(&mut self) -> bool {
        let moved = self.session.next();
        if moved {
            self.restore_pending();
        }
        moved
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.session.prev();
        if moved {
            self.restore_pending();
        }
        moved
    }

    /// Select a score. Ignored (returns `false`) while the paper is locked or
    /// no paper is loaded.
    pub fn select_score(&mut self, score: Score) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.session.select_score(score);
        true
    }

    /// Replace the pending comment. Ignored while locked.
    pub fn set_comment(&mut self, comment: &str) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.session.set_comment(comment);
        true
    }

    /// Insert the preset at zero-based `index`. Ignored while locked or when
    /// the index is out of range.
    pub fn insert_preset(&mut self, index: usize) -> bool {
        if !self.is_editable() {
            return false;
        }
        let Some(preset) = self.presets.get(index) else {
            return false;
        };
        self.session.append_preset(&preset.text);
        true
    }

    /// Save the pending score and comment for the current paper.
    ///
    /// # Errors
    ///
    /// Any precondition of [`ReviewService::save`], or `NoPapers`.
    pub fn save(&mut self) -> Result<Review, StoreError> {
        let paper_id = self.require_current_paper()?;
        self.ensure_available(&paper_id, ReviewAction::Save)?;
        let review = self.service.save(
            self.session.reviewer(),
            &paper_id,
            self.session.pending_score(),
            self.session.pending_comment(),
        )?;
        self.session.restore_from(Some(&review));
        Ok(review)
    }

    /// Finalize the current paper.
    ///
    /// Only the saved record is ever locked, so finalize is refused while the
    /// pending score or comment differs from it.
    ///
    /// # Errors
    ///
    /// Any precondition of [`ReviewService::finalize`], `UnsavedChanges`, or
    /// `NoPapers`.
    pub fn finalize(&mut self) -> Result<Review, StoreError> {
        let paper_id = self.require_current_paper()?;
        self.ensure_available(&paper_id, ReviewAction::Finalize)?;
        let review = self.service.finalize(self.session.reviewer(), &paper_id)?;
        self.session.restore_from(Some(&review));
        Ok(review)
    }

    /// Unfinalize the current paper.
    ///
    /// # Errors
    ///
    /// Any precondition of [`ReviewService::unfinalize`], or `NoPapers`.
    pub fn unfinalize(&mut self) -> Result<Review, StoreError> {
        let paper_id = self.require_current_paper()?;
        self.ensure_available(&paper_id, ReviewAction::Unfinalize)?;
        let review = self.service.unfinalize(self.session.reviewer(), &paper_id)?;
        self.session.restore_from(Some(&review));
        Ok(review)
    }

    pub fn availability(&self) -> ActionAvailability {
        self.service.action_availability(&self.session)
    }

    /// Snapshot of the current paper, its state and the pending edits.
    pub fn view(&self) -> DeskView {
        let paper = self.session.current_paper().cloned();
        let state = paper.as_ref().map_or(ReviewState::Unreviewed, |paper| {
            self.service.state_of(self.session.reviewer(), &paper.id)
        });
        DeskView {
            position: if paper.is_some() {
                self.session.current_index() + 1
            } else {
                0
            },
            total: self.session.papers().len(),
            paper,
            state,
            pending_score: self.session.pending_score().map(Score::get),
            pending_comment: self.session.pending_comment().to_string(),
            actions: self.availability(),
        }
    }

    pub fn statuses(&self, filter: Option<&str>) -> Vec<PaperStatusRow> {
        self.service
            .paper_statuses(self.session.reviewer(), self.session.papers(), filter)
    }

    pub fn stats(&self) -> ReviewStats {
        self.service
            .stats(self.session.reviewer(), self.session.papers())
    }

    /// # Errors
    ///
    /// Any precondition of [`ReviewService::export`].
    pub fn export(&self) -> Result<ExportFile, StoreError> {
        self.service.export(self.session.reviewer())
    }

    /// Delete every stored review and clear pending edits.
    ///
    /// # Errors
    ///
    /// Storage failure.
    pub fn reset(&mut self) -> Result<usize, StoreError> {
        let removed = self.service.reset()?;
        self.session.clear_pending();
        Ok(removed)
    }

    fn is_editable(&self) -> bool {
        self.session.current_paper().is_some_and(|paper| {
            !self
                .service
                .store()
                .is_locked(&paper.id, self.session.reviewer())
        })
    }

    fn require_current_paper(&self) -> Result<String, StoreError> {
        if self.session.reviewer().is_empty() {
            return Err(PreconditionReason::MissingReviewer.into());
        }
        self.session
            .current_paper()
            .map(|paper| paper.id.clone())
            .ok_or_else(|| PreconditionReason::NoPapers.into())
    }

    /// Refuse `action` unless the derived availability enables it.
    fn ensure_available(&self, paper_id: &str, action: ReviewAction) -> Result<(), StoreError> {
        let actions = self.availability();
        let allowed = match action {
            ReviewAction::Save => actions.can_save,
            ReviewAction::Finalize => actions.can_finalize,
            ReviewAction::Unfinalize => actions.can_unfinalize,
        };
        if allowed {
            return Ok(());
        }

        let reason = if action == ReviewAction::Save && self.session.pending_score().is_none() {
            PreconditionReason::MissingScore
        } else {
            self.service
                .state_of(self.session.reviewer(), paper_id)
                .apply(action)
                .err()
                .unwrap_or(PreconditionReason::UnsavedChanges)
        };
        Err(reason.into())
    }

    fn restore_pending(&mut self) {
        let record = self
            .session
            .current_paper()
            .and_then(|paper| {
                self.service
                    .store()
                    .find_review(self.session.reviewer(), &paper.id)
            });
        self.session.restore_from(record.as_ref());
    }
}
