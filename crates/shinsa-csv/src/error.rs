//! CSV error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    /// The input held no usable paper rows (empty, header-only, or malformed).
    #[error("no papers found (the file is empty or not a valid paper CSV)")]
    NoPapers,

    /// A required header column is absent.
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A data row could not be interpreted.
    #[error("invalid row {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}
