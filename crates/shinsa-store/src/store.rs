//! The persisted review collection.
//!
//! All reviews of all reviewers live in a single JSON array stored under
//! [`REVIEWS_KEY`]. There is no cache: every query reloads the blob, so a
//! write made by another handle on the same backend is visible immediately.
//! A missing, unreadable or malformed blob reads as an empty collection.

use shinsa_core::entities::Review;

use crate::error::StoreError;
use crate::kv::KvStore;

/// Key of the last-used reviewer name.
pub const REVIEWER_KEY: &str = "shinsa_reviewer_name";
/// Key of the review collection.
pub const REVIEWS_KEY: &str = "shinsa_reviews_v1";

#[derive(Debug, Clone, Default)]
pub struct ReviewStore<S> {
    kv: S,
}

impl<S: KvStore> ReviewStore<S> {
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Load every stored review. Never fails; problems are logged and the
    /// collection is treated as empty.
    pub fn load_all(&self) -> Vec<Review> {
        let raw = match self.kv.get(REVIEWS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read reviews, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(reviews) => reviews,
            Err(error) => {
                tracing::warn!(%error, "stored reviews are malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole collection.
    pub fn save_all(&mut self, reviews: &[Review]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(reviews)?;
        self.kv.set(REVIEWS_KEY, &blob)?;
        tracing::debug!(count = reviews.len(), "reviews saved");
        Ok(())
    }

    /// The stored review for `(reviewer, paper_id)`, if any.
    pub fn find_review(&self, reviewer: &str, paper_id: &str) -> Option<Review> {
        self.load_all()
            .into_iter()
            .find(|review| review.is_for(reviewer, paper_id))
    }

    /// Whether the pair has a finalized review. An empty paper id is never locked.
    pub fn is_locked(&self, paper_id: &str, reviewer: &str) -> bool {
        !paper_id.is_empty()
            && self
                .find_review(reviewer, paper_id)
                .is_some_and(|review| review.finalized)
    }

    /// Every review written by `reviewer`, in stored order.
    pub fn reviews_by(&self, reviewer: &str) -> Vec<Review> {
        self.load_all()
            .into_iter()
            .filter(|review| review.reviewer == reviewer)
            .collect()
    }

    /// Remove all reviews of all reviewers. The reviewer name is kept.
    ///
    /// Returns how many reviews were removed.
    pub fn reset(&mut self) -> Result<usize, StoreError> {
        let removed = self.load_all().len();
        self.kv.remove(REVIEWS_KEY)?;
        tracing::info!(removed, "all reviews removed");
        Ok(removed)
    }

    /// Last-used reviewer name, empty if none was stored.
    pub fn reviewer_name(&self) -> String {
        match self.kv.get(REVIEWER_KEY) {
            Ok(name) => name.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, "failed to read reviewer name");
                String::new()
            }
        }
    }

    /// Store the reviewer name, trimmed. Returns the stored value.
    pub fn set_reviewer_name(&mut self, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        self.kv.set(REVIEWER_KEY, name)?;
        Ok(name.to_string())
    }
}
