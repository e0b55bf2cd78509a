//! Submission CSV: writing and reading back.
//!
//! Format: UTF-8 with a leading byte-order mark, CRLF line endings, a plain
//! header row and fully quoted data fields. Any field starting with `=`, `+`,
//! `-` or `@` gets a leading apostrophe so spreadsheet viewers do not evaluate
//! it as a formula.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use shinsa_core::entities::{Review, Score};

use crate::decode::decode_bytes;
use crate::error::CsvError;
use crate::parse::{HeaderIndex, parse_rows};

pub const EXPORT_HEADER: [&str; 6] = [
    "reviewer",
    "paper_id",
    "score",
    "comment",
    "timestamp",
    "finalized",
];

const BOM: &str = "\u{feff}";
const LINE_END: &str = "\r\n";
const FORMULA_GUARD: char = '\'';

fn is_formula_lead(c: char) -> bool {
    matches!(c, '=' | '+' | '-' | '@')
}

/// Prefix a formula-like value with an apostrophe.
#[must_use]
pub fn sanitize_field(value: &str) -> Cow<'_, str> {
    if value.starts_with(is_formula_lead) {
        Cow::Owned(format!("{FORMULA_GUARD}{value}"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Sanitize, double embedded quotes, and wrap in quotes.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", sanitize_field(value).replace('"', "\"\""))
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render reviews as CSV text (no byte-order mark, no trailing line break).
#[must_use]
pub fn encode_reviews(reviews: &[Review]) -> String {
    let mut lines = Vec::with_capacity(reviews.len() + 1);
    lines.push(EXPORT_HEADER.join(","));
    for review in reviews {
        let score = review.score.map(|s| s.to_string()).unwrap_or_default();
        let fields = [
            quote_field(&review.reviewer),
            quote_field(&review.paper_id),
            quote_field(&score),
            quote_field(&review.comment),
            quote_field(&format_timestamp(&review.timestamp)),
            quote_field(if review.finalized { "true" } else { "false" }),
        ];
        lines.push(fields.join(","));
    }
    lines.join(LINE_END)
}

/// Render reviews as the bytes of a submission file.
#[must_use]
pub fn encode_export(reviews: &[Review]) -> Vec<u8> {
    let mut out = String::from(BOM);
    out.push_str(&encode_reviews(reviews));
    out.into_bytes()
}

/// File name for a reviewer's submission: `review_<reviewer>.csv`.
///
/// Path separators in the name are replaced so the file stays in the target
/// directory.
#[must_use]
pub fn export_filename(reviewer: &str) -> String {
    let safe: String = reviewer
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("review_{safe}.csv")
}

/// Undo the formula guard added by [`sanitize_field`].
fn unsanitize(value: &str) -> &str {
    match value.strip_prefix(FORMULA_GUARD) {
        Some(rest) if rest.starts_with(is_formula_lead) => rest,
        _ => value,
    }
}

/// Read a submission file back into reviews.
///
/// Values that were prefixed by the formula guard are restored. Timestamps
/// carry the millisecond precision of the file.
///
/// # Errors
///
/// Returns `CsvError::MissingColumn` if the header lacks an export column, or
/// `CsvError::InvalidRow` for unreadable score, timestamp or finalized values.
pub fn parse_export(bytes: &[u8]) -> Result<Vec<Review>, CsvError> {
    let decoded = decode_bytes(bytes);
    let mut rows = parse_rows(&decoded.text).into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let header = HeaderIndex::new(&header);
    let mut columns = [0usize; 6];
    for (slot, name) in columns.iter_mut().zip(EXPORT_HEADER) {
        *slot = header
            .position(name)
            .ok_or_else(|| CsvError::MissingColumn(name.to_string()))?;
    }
    let [reviewer, paper_id, score, comment, timestamp, finalized] = columns;

    rows.enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !cell.is_empty()))
        .map(|(index, row)| {
            let line = index + 2;
            let get = |col: usize| unsanitize(row.get(col).map_or("", String::as_str));
            let invalid = |reason: String| CsvError::InvalidRow { line, reason };

            let score = match get(score) {
                "" => None,
                raw => Some(
                    raw.parse::<Score>()
                        .map_err(|error| invalid(error.to_string()))?,
                ),
            };
            let timestamp = DateTime::parse_from_rfc3339(get(timestamp))
                .map_err(|error| invalid(format!("timestamp: {error}")))?
                .with_timezone(&Utc);
            let finalized = match get(finalized) {
                "true" => true,
                "false" => false,
                other => return Err(invalid(format!("finalized: unexpected '{other}'"))),
            };

            Ok(Review {
                reviewer: get(reviewer).to_string(),
                paper_id: get(paper_id).to_string(),
                score,
                comment: get(comment).to_string(),
                timestamp,
                finalized,
            })
        })
        .collect()
}
