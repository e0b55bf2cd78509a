//! Reading an exported submission file must give back what was exported.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shinsa_core::entities::{Review, Score};
use shinsa_csv::{encode_export, parse_export, parse_papers};

fn at_millis(ms: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_millis_opt(1_772_000_000_000 + ms).unwrap()
}

fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            reviewer: "Ann".into(),
            paper_id: "1".into(),
            score: Some(Score::new(4).unwrap()),
            comment: "ok".into(),
            timestamp: at_millis(0),
            finalized: false,
        },
        Review {
            reviewer: "-dash reviewer".into(),
            paper_id: "=2".into(),
            score: Some(Score::new(1).unwrap()),
            comment: "Says \"weak\", needs work,\r\nsecond line".into(),
            timestamp: at_millis(1_234),
            finalized: true,
        },
        Review {
            reviewer: "審査者".into(),
            paper_id: "@3".into(),
            score: Some(Score::new(5).unwrap()),
            comment: "+great".into(),
            timestamp: at_millis(99_999),
            finalized: false,
        },
        Review {
            reviewer: "Ann".into(),
            paper_id: "4".into(),
            score: None,
            comment: String::new(),
            timestamp: at_millis(5),
            finalized: false,
        },
    ]
}

#[test]
fn export_then_parse_preserves_every_field() {
    let reviews = sample_reviews();
    let bytes = encode_export(&reviews);
    let recovered = parse_export(&bytes).expect("export should parse");
    assert_eq!(recovered, reviews);
}

#[test]
fn empty_collection_exports_header_only() {
    let bytes = encode_export(&[]);
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "\u{feff}reviewer,paper_id,score,comment,timestamp,finalized"
    );
    assert!(parse_export(text.as_bytes()).unwrap().is_empty());
}

#[test]
fn paper_import_scenario() {
    let papers = parse_papers("id,title,abstract\n1,\"Hello, World\",\"An abstract\"\n");
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].id, "1");
    assert_eq!(papers[0].title, "Hello, World");
    assert_eq!(papers[0].abstract_text, "An abstract");
    assert_eq!(papers[0].section, "");
}
