//! CLI response types returned as JSON by `shinsa` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::availability::ActionAvailability;
use crate::entities::{Paper, Review};
use crate::enums::ReviewState;

/// Response from `shinsa parse`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub source: String,
    pub count: usize,
    pub papers: Vec<Paper>,
}

/// Response from `shinsa save`, `shinsa finalize` and `shinsa unfinalize`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransitionResponse {
    pub review: Review,
    pub state: ReviewState,
}

/// One row of `shinsa status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaperStatusRow {
    /// Zero-based position in the loaded paper list.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub state: ReviewState,
}

/// Response from `shinsa stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewStats {
    pub reviewer: String,
    /// Count of the reviewer's reviews per score, index 0 = score 1.
    pub score_counts: [u32; 5],
    pub not_started: u32,
    pub in_progress: u32,
    pub finalized: u32,
}

/// Response from `shinsa export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub reviewer: String,
    pub path: String,
    pub rows: usize,
}

/// Response from `shinsa reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResetResponse {
    pub removed: usize,
}

/// Response from `shinsa reviewer`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewerResponse {
    pub reviewer: String,
}

/// Snapshot of the desk's current paper, printed by `show` in `shinsa desk`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeskView {
    /// One-based position, `0` when nothing is loaded.
    pub position: usize,
    pub total: usize,
    pub paper: Option<Paper>,
    pub state: ReviewState,
    pub pending_score: Option<u8>,
    pub pending_comment: String,
    pub actions: ActionAvailability,
}
