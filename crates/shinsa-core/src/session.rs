//! Transient review-session state.
//!
//! One `SessionState` is owned by whoever drives the review (the interactive
//! desk, a test). It holds the loaded papers, the cursor and the pending
//! (not yet saved) score and comment. Nothing here is persisted; the reviewer
//! name is mirrored into the store by the caller.

use crate::entities::{Paper, Review, Score};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    reviewer: String,
    papers: Vec<Paper>,
    current_index: usize,
    pending_score: Option<Score>,
    pending_comment: String,
}

impl SessionState {
    #[must_use]
    pub fn new(reviewer: impl Into<String>) -> Self {
        Self {
            reviewer: reviewer.into(),
            ..Self::default()
        }
    }

    /// Reviewer name with surrounding whitespace removed.
    #[must_use]
    pub fn reviewer(&self) -> &str {
        self.reviewer.trim()
    }

    pub fn set_reviewer(&mut self, reviewer: impl Into<String>) {
        self.reviewer = reviewer.into();
    }

    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    #[must_use]
    pub fn has_papers(&self) -> bool {
        !self.papers.is_empty()
    }

    /// Replace the paper list wholesale and move the cursor to the first paper.
    ///
    /// Pending edits are discarded; callers restore them from the store for the
    /// new current paper.
    pub fn load_papers(&mut self, papers: Vec<Paper>) {
        self.papers = papers;
        self.current_index = 0;
        self.clear_pending();
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_paper(&self) -> Option<&Paper> {
        self.papers.get(self.current_index)
    }

    /// Move to `index`. Returns `false` (cursor unchanged) when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.papers.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Move to the next paper. Does not wrap.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current_index + 1)
    }

    /// Move to the previous paper. Does not wrap.
    pub fn prev(&mut self) -> bool {
        match self.current_index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    #[must_use]
    pub const fn pending_score(&self) -> Option<Score> {
        self.pending_score
    }

    /// Select a score. The caller must refuse this while the paper is locked.
    pub const fn select_score(&mut self, score: Score) {
        self.pending_score = Some(score);
    }

    #[must_use]
    pub fn pending_comment(&self) -> &str {
        &self.pending_comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.pending_comment = comment.into();
    }

    /// Insert a preset comment: replaces an empty comment, otherwise appends
    /// after a single space.
    pub fn append_preset(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let current = self.pending_comment.trim();
        self.pending_comment = if current.is_empty() {
            text.to_string()
        } else {
            format!("{current} {text}")
        };
    }

    /// Take pending score and comment from the stored review, or clear them.
    pub fn restore_from(&mut self, record: Option<&Review>) {
        match record {
            Some(review) => {
                self.pending_score = review.score;
                self.pending_comment.clone_from(&review.comment);
            }
            None => self.clear_pending(),
        }
    }

    pub fn clear_pending(&mut self) {
        self.pending_score = None;
        self.pending_comment.clear();
    }
}
