//! Review service: the reviewer-facing operations over a [`ReviewStore`].
//!
//! Each mutation loads the collection, checks the transition against
//! [`ReviewState::apply`], edits the single matching record and writes the
//! whole collection back. A refused transition never writes.

use shinsa_core::availability::{ActionAvailability, derive_action_availability};
use shinsa_core::entities::{Paper, Review, Score};
use shinsa_core::enums::{ReviewAction, ReviewState};
use shinsa_core::errors::{CoreError, PreconditionReason};
use shinsa_core::responses::{PaperStatusRow, ReviewStats};
use shinsa_core::session::SessionState;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::kv::KvStore;
use crate::store::ReviewStore;

/// An export ready to be written: suggested file name and encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub rows: usize,
}

pub struct ReviewService<S, C = SystemClock> {
    store: ReviewStore<S>,
    clock: C,
}

impl<S: KvStore> ReviewService<S> {
    pub const fn new(kv: S) -> Self {
        Self::with_clock(kv, SystemClock)
    }
}

impl<S: KvStore, C: Clock> ReviewService<S, C> {
    pub const fn with_clock(kv: S, clock: C) -> Self {
        Self {
            store: ReviewStore::new(kv),
            clock,
        }
    }

    pub const fn store(&self) -> &ReviewStore<S> {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut ReviewStore<S> {
        &mut self.store
    }

    pub fn state_of(&self, reviewer: &str, paper_id: &str) -> ReviewState {
        ReviewState::of(self.store.find_review(reviewer.trim(), paper_id).as_ref())
    }

    /// Create or update the review for `(reviewer, paper_id)`.
    ///
    /// # Errors
    ///
    /// `MissingReviewer`, `MissingScore` or `Locked` preconditions, or a
    /// storage failure.
    pub fn save(
        &mut self,
        reviewer: &str,
        paper_id: &str,
        score: Option<Score>,
        comment: &str,
    ) -> Result<Review, StoreError> {
        let reviewer = require_reviewer(reviewer)?;
        let Some(score) = score else {
            return Err(PreconditionReason::MissingScore.into());
        };
        require_paper(paper_id)?;
        let comment = comment.trim();
        self.transition(reviewer, paper_id, ReviewAction::Save, |review| {
            review.score = Some(score);
            review.comment = comment.to_string();
        })
    }

    /// Lock a saved review.
    ///
    /// # Errors
    ///
    /// `MissingReviewer`, `NotSaved` or `AlreadyFinalized` preconditions, or a
    /// storage failure.
    pub fn finalize(&mut self, reviewer: &str, paper_id: &str) -> Result<Review, StoreError> {
        let reviewer = require_reviewer(reviewer)?;
        require_paper(paper_id)?;
        self.transition(reviewer, paper_id, ReviewAction::Finalize, |_| {})
    }

    /// Unlock a finalized review. Score and comment are kept.
    ///
    /// # Errors
    ///
    /// `MissingReviewer` or `NotFinalized` preconditions, or a storage failure.
    pub fn unfinalize(&mut self, reviewer: &str, paper_id: &str) -> Result<Review, StoreError> {
        let reviewer = require_reviewer(reviewer)?;
        require_paper(paper_id)?;
        self.transition(reviewer, paper_id, ReviewAction::Unfinalize, |_| {})
    }

    fn transition(
        &mut self,
        reviewer: &str,
        paper_id: &str,
        action: ReviewAction,
        update: impl FnOnce(&mut Review),
    ) -> Result<Review, StoreError> {
        let mut reviews = self.store.load_all();
        let position = reviews
            .iter()
            .position(|review| review.is_for(reviewer, paper_id));
        let from = ReviewState::of(position.map(|index| &reviews[index]));
        let to = from.apply(action).map_err(CoreError::precondition)?;

        let now = self.clock.now();
        let index = position.unwrap_or_else(|| {
            reviews.push(Review {
                reviewer: reviewer.to_string(),
                paper_id: paper_id.to_string(),
                score: None,
                comment: String::new(),
                timestamp: now,
                finalized: false,
            });
            reviews.len() - 1
        });

        let review = &mut reviews[index];
        update(review);
        review.finalized = to == ReviewState::Finalized;
        review.timestamp = now;
        let updated = review.clone();

        self.store.save_all(&reviews)?;
        tracing::debug!(reviewer, paper_id, %action, %from, %to, "review updated");
        Ok(updated)
    }

    /// Availability of save / finalize / unfinalize for the session's current paper.
    pub fn action_availability(&self, session: &SessionState) -> ActionAvailability {
        let record = session
            .current_paper()
            .and_then(|paper| self.store.find_review(session.reviewer(), &paper.id));
        derive_action_availability(session, record.as_ref())
    }

    /// One status row per paper, in list order, optionally filtered by a
    /// case-insensitive substring over id, title and abstract.
    pub fn paper_statuses(
        &self,
        reviewer: &str,
        papers: &[Paper],
        filter: Option<&str>,
    ) -> Vec<PaperStatusRow> {
        let reviewer = reviewer.trim();
        let reviews = self.store.load_all();
        let query = filter.map(str::trim).unwrap_or_default().to_lowercase();

        papers
            .iter()
            .enumerate()
            .filter(|(_, paper)| query.is_empty() || paper.matches(&query))
            .map(|(index, paper)| PaperStatusRow {
                index,
                id: paper.id.clone(),
                title: paper.title.clone(),
                state: state_in(&reviews, reviewer, &paper.id),
            })
            .collect()
    }

    /// Score distribution over all of the reviewer's reviews, and progress
    /// over `papers`.
    pub fn stats(&self, reviewer: &str, papers: &[Paper]) -> ReviewStats {
        let reviewer = reviewer.trim();
        let reviews = self.store.load_all();
        let mut stats = ReviewStats {
            reviewer: reviewer.to_string(),
            ..ReviewStats::default()
        };

        for review in reviews.iter().filter(|r| r.reviewer == reviewer) {
            if let Some(score) = review.score {
                stats.score_counts[score.bucket()] += 1;
            }
        }
        for paper in papers {
            match state_in(&reviews, reviewer, &paper.id) {
                ReviewState::Unreviewed => stats.not_started += 1,
                ReviewState::Saved => stats.in_progress += 1,
                ReviewState::Finalized => stats.finalized += 1,
            }
        }
        stats
    }

    /// Build the submission CSV for `reviewer`.
    ///
    /// # Errors
    ///
    /// `MissingReviewer` or `NoReviewsToExport` preconditions.
    pub fn export(&self, reviewer: &str) -> Result<ExportFile, StoreError> {
        let reviewer = require_reviewer(reviewer)?;
        let reviews = self.store.reviews_by(reviewer);
        if reviews.is_empty() {
            return Err(PreconditionReason::NoReviewsToExport.into());
        }
        Ok(ExportFile {
            filename: shinsa_csv::export_filename(reviewer),
            bytes: shinsa_csv::encode_export(&reviews),
            rows: reviews.len(),
        })
    }

    /// Delete all reviews of all reviewers.
    ///
    /// # Errors
    ///
    /// Storage failure.
    pub fn reset(&mut self) -> Result<usize, StoreError> {
        self.store.reset()
    }
}

fn require_reviewer(reviewer: &str) -> Result<&str, StoreError> {
    let reviewer = reviewer.trim();
    if reviewer.is_empty() {
        return Err(PreconditionReason::MissingReviewer.into());
    }
    Ok(reviewer)
}

fn require_paper(paper_id: &str) -> Result<(), StoreError> {
    if paper_id.is_empty() {
        return Err(CoreError::Validation("paper id is empty".into()).into());
    }
    Ok(())
}

fn state_in(reviews: &[Review], reviewer: &str, paper_id: &str) -> ReviewState {
    ReviewState::of(reviews.iter().find(|r| r.is_for(reviewer, paper_id)))
}
