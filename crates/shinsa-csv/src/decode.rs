//! Byte-to-text decoding for uploaded CSV files.
//!
//! Strategies are tried in order and the first success wins:
//! 1. strict UTF-8 (any invalid sequence rejects)
//! 2. strict Shift-JIS
//! 3. lenient UTF-8 with U+FFFD replacement (never fails)
//!
//! Shift-JIS is strict on purpose: input that is neither encoding falls through
//! to lenient UTF-8 rather than becoming Shift-JIS with replacement characters.
//!
//! No strategy strips a byte-order mark; header handling in [`crate::parse`]
//! ignores one.

use encoding_rs::{SHIFT_JIS, UTF_8};

/// Which strategy produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    ShiftJis,
    Utf8Lossy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Decode raw file bytes into text.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> Decoded {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Decoded {
            text: text.into_owned(),
            encoding: TextEncoding::Utf8,
        };
    }

    if let Some(text) = SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes) {
        tracing::debug!(len = bytes.len(), "input is not UTF-8; decoded as Shift-JIS");
        return Decoded {
            text: text.into_owned(),
            encoding: TextEncoding::ShiftJis,
        };
    }

    tracing::debug!(
        len = bytes.len(),
        "input is neither UTF-8 nor Shift-JIS; decoding leniently"
    );
    Decoded {
        text: String::from_utf8_lossy(bytes).into_owned(),
        encoding: TextEncoding::Utf8Lossy,
    }
}
