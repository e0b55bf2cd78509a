use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Score;

/// A reviewer's score, comment and lock status for one paper.
///
/// At most one review exists per `(reviewer, paper_id)` pair. `finalized` is
/// only changed by finalize/unfinalize, never by a save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub reviewer: String,
    pub paper_id: String,
    pub score: Option<Score>,
    #[serde(default)]
    pub comment: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub finalized: bool,
}

impl Review {
    /// Whether this record belongs to the given `(reviewer, paper_id)` key.
    #[must_use]
    pub fn is_for(&self, reviewer: &str, paper_id: &str) -> bool {
        self.reviewer == reviewer && self.paper_id == paper_id
    }
}
