//! # shinsa-store
//!
//! Persisted review state for shinsa.
//!
//! - [`kv`]: keyed blob storage (`FileKvStore` on disk, `MemoryKvStore` for tests)
//! - [`store`]: the review collection stored as one JSON blob under a fixed key,
//!   reloaded on every query
//! - [`service`]: the save → finalize → unfinalize state machine on top of it
//! - [`desk`]: a review session controller tying `SessionState` to the service
//!
//! Every mutation is a whole-collection read-modify-write. This is only safe
//! with a single writer; concurrent processes on the same storage directory
//! are not coordinated and the last writer wins.

pub mod clock;
pub mod desk;
pub mod error;
pub mod kv;
pub mod service;
pub mod store;

pub use clock::{Clock, StepClock, SystemClock};
pub use desk::ReviewDesk;
pub use error::StoreError;
pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use service::{ExportFile, ReviewService};
pub use store::{REVIEWER_KEY, REVIEWS_KEY, ReviewStore};
