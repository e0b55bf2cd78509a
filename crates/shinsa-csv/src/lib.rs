//! # shinsa-csv
//!
//! CSV handling for shinsa:
//! - [`decode`]: byte-to-text decoding with a strict UTF-8 → Shift-JIS →
//!   lenient UTF-8 cascade, for files saved by spreadsheet tools in either
//!   encoding
//! - [`parse`]: a permissive, quote-aware CSV reader and the paper-list mapping
//! - [`export`]: the submission CSV (BOM, CRLF, quoted fields, formula-injection
//!   guard) and a reader for files produced by it

pub mod decode;
pub mod export;
pub mod parse;

mod error;

pub use decode::{Decoded, TextEncoding, decode_bytes};
pub use error::CsvError;
pub use export::{encode_export, encode_reviews, export_filename, parse_export, sanitize_field};
pub use parse::{load_papers, parse_papers, parse_rows};
