//! Entity structs for the shinsa domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! persisted review blob and CLI output can be validated against a schema.

mod paper;
mod preset;
mod review;
mod score;

pub use paper::Paper;
pub use preset::CommentPreset;
pub use review::Review;
pub use score::Score;
