use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An imported abstract. Immutable once loaded; `id` is the join key for reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub section: String,
}

impl Paper {
    /// True when every column is empty. Such rows are dropped on import.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_empty()
            && self.title.is_empty()
            && self.abstract_text.is_empty()
            && self.section.is_empty()
    }

    /// Case-insensitive substring match over id, title and abstract.
    ///
    /// `query` is expected to be lower-cased already.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!("{} {} {}", self.id, self.title, self.abstract_text).to_lowercase();
        haystack.contains(query)
    }
}
