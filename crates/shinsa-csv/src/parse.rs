//! Permissive, quote-aware CSV reading and the paper-list mapping.
//!
//! The reader accepts what spreadsheet tools actually produce rather than
//! strict RFC 4180: bare `\r` is dropped anywhere outside quotes, a quote
//! toggles quoted mode wherever it appears in a field, and a final record
//! without a trailing newline is kept.

use shinsa_core::entities::Paper;

use crate::decode::decode_bytes;
use crate::error::CsvError;

const QUOTE: char = '"';

/// Split text into records of fields.
///
/// * `,` separates fields, `\n` separates records, `\r` outside quotes is dropped
/// * inside quotes, `""` is a literal `"`, a lone `"` ends quoted mode, and
///   `,`/`\n`/`\r` are literal
/// * a trailing record without newline is kept if it has content or at least
///   one separator
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            QUOTE => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        rows.push(record);
    }

    rows
}

/// Normalise a header cell: trimmed, lower-cased, byte-order mark removed.
pub(crate) fn header_key(cell: &str) -> String {
    cell.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Column positions resolved from a header row by name.
pub(crate) struct HeaderIndex(Vec<String>);

impl HeaderIndex {
    pub(crate) fn new(header: &[String]) -> Self {
        Self(header.iter().map(|cell| header_key(cell)).collect())
    }

    /// Position of the first column named `name`.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|cell| cell == name)
    }
}

fn cell(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .cloned()
        .unwrap_or_default()
}

/// Map CSV text to papers.
///
/// The first record is the header; `id`, `title`, `abstract` and `section`
/// are looked up by name in any order. Missing columns read as empty and
/// all-empty rows are dropped. Returns an empty list for empty or header-only
/// input; see [`load_papers`] for the failing variant.
#[must_use]
pub fn parse_papers(text: &str) -> Vec<Paper> {
    let mut rows = parse_rows(text).into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let header = HeaderIndex::new(&header);
    let id = header.position("id");
    let title = header.position("title");
    let abstract_text = header.position("abstract");
    let section = header.position("section");

    rows.map(|row| Paper {
        id: cell(&row, id),
        title: cell(&row, title),
        abstract_text: cell(&row, abstract_text),
        section: cell(&row, section),
    })
    .filter(|paper| !paper.is_blank())
    .collect()
}

/// Decode file bytes and map them to papers.
///
/// # Errors
///
/// Returns `CsvError::NoPapers` when no paper rows survive; an empty list is a
/// load failure, not a valid empty import.
pub fn load_papers(bytes: &[u8]) -> Result<Vec<Paper>, CsvError> {
    let decoded = decode_bytes(bytes);
    let papers = parse_papers(&decoded.text);
    if papers.is_empty() {
        return Err(CsvError::NoPapers);
    }
    tracing::debug!(
        count = papers.len(),
        encoding = ?decoded.encoding,
        "loaded paper list"
    );
    Ok(papers)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn quoted_comma_stays_in_field() {
        let papers = parse_papers("id,title,abstract\n1,\"Hello, World\",\"An abstract\"\n");
        assert_eq!(
            papers,
            vec![Paper {
                id: "1".into(),
                title: "Hello, World".into(),
                abstract_text: "An abstract".into(),
                section: String::new(),
            }]
        );
    }

    #[test]
    fn doubled_quote_is_literal() {
        let rows = parse_rows("a,\"say \"\"hi\"\"\"\n");
        assert_eq!(rows, vec![row(&["a", "say \"hi\""])]);
    }

    #[test]
    fn crlf_and_lf_are_equivalent() {
        assert_eq!(parse_rows("a,b\r\nc,d\r\n"), parse_rows("a,b\nc,d\n"));
    }

    #[test]
    fn newline_inside_quotes_is_kept() {
        let rows = parse_rows("id,abstract\n1,\"line one\r\nline two\"\n");
        assert_eq!(rows[1], row(&["1", "line one\r\nline two"]));
    }

    #[rstest]
    #[case("a,b", vec![row(&["a", "b"])])]
    #[case("a,", vec![row(&["a", ""])])]
    #[case("a\n", vec![row(&["a"])])]
    #[case("a\n,", vec![row(&["a"]), row(&["", ""])])]
    #[case("a\n\"\"", vec![row(&["a"])])]
    #[case("", vec![])]
    fn final_record_rules(#[case] input: &str, #[case] expected: Vec<Vec<String>>) {
        assert_eq!(parse_rows(input), expected);
    }

    #[test]
    fn columns_are_found_by_name_in_any_order() {
        let papers = parse_papers(" Section ,ABSTRACT,Title,Id\nbasic,abs,T,7\n");
        assert_eq!(
            papers,
            vec![Paper {
                id: "7".into(),
                title: "T".into(),
                abstract_text: "abs".into(),
                section: "basic".into(),
            }]
        );
    }

    #[test]
    fn bom_in_header_is_ignored() {
        let papers = parse_papers("\u{feff}id,title\n1,T\n");
        assert_eq!(papers[0].id, "1");
    }

    #[test]
    fn blank_rows_are_dropped_and_short_rows_padded() {
        let papers = parse_papers("id,title,abstract\n\n,,\n2\n");
        assert_eq!(
            papers,
            vec![Paper {
                id: "2".into(),
                ..Paper::default()
            }]
        );
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(parse_papers("id,title,abstract\n").is_empty());
        assert!(parse_papers("").is_empty());
    }

    #[test]
    fn load_papers_fails_on_empty_input() {
        assert!(matches!(load_papers(b""), Err(CsvError::NoPapers)));
        assert!(matches!(load_papers(b"id,title\n"), Err(CsvError::NoPapers)));
    }

    #[test]
    fn load_papers_preserves_row_order() {
        let papers = load_papers(b"id,title\n3,c\n1,a\n2,b").unwrap();
        let ids: Vec<_> = papers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
