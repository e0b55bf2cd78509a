//! End-to-end review lifecycle against the file-backed store.

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use shinsa_core::entities::{Review, Score};
use shinsa_core::enums::ReviewState;
use shinsa_core::errors::PreconditionReason;
use shinsa_store::{
    FileKvStore, KvStore, REVIEWS_KEY, ReviewService, StepClock, StoreError,
};
use tempfile::TempDir;

fn service_in(dir: &TempDir) -> ReviewService<FileKvStore, StepClock> {
    let start = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();
    ReviewService::with_clock(
        FileKvStore::new(dir.path()),
        StepClock::new(start, Duration::milliseconds(250)),
    )
}

fn score(n: i64) -> Option<Score> {
    Some(Score::new(n).unwrap())
}

#[test]
fn ann_saves_finalizes_and_is_locked_out() {
    let dir = TempDir::new().unwrap();
    let mut svc = service_in(&dir);

    let saved = svc.save("Ann", "1", score(4), "ok").unwrap();
    assert!(!saved.finalized);
    assert_eq!(svc.store().load_all().len(), 1);

    let finalized = svc.finalize("Ann", "1").unwrap();
    assert!(finalized.finalized);

    let err = svc.save("Ann", "1", score(1), "changed").unwrap_err();
    assert_eq!(err.precondition_reason(), Some(PreconditionReason::Locked));
    assert_eq!(svc.store().load_all(), vec![finalized]);
}

#[test]
fn relock_moves_timestamp_forward() {
    let dir = TempDir::new().unwrap();
    let mut svc = service_in(&dir);
    svc.save("Ann", "1", score(3), "").unwrap();

    let first = svc.finalize("Ann", "1").unwrap();
    let reopened = svc.unfinalize("Ann", "1").unwrap();
    assert!(!reopened.finalized);
    assert_eq!(reopened.score, first.score);

    let second = svc.finalize("Ann", "1").unwrap();
    assert!(second.finalized);
    assert!(second.timestamp > first.timestamp);
}

#[test]
fn interleaved_saves_never_duplicate_pairs() {
    let dir = TempDir::new().unwrap();
    let mut svc = service_in(&dir);
    for round in 1..=3 {
        for paper in ["1", "2", "3"] {
            for reviewer in ["Ann", "Bob"] {
                svc.save(reviewer, paper, score(round), "").unwrap();
            }
        }
    }

    let all = svc.store().load_all();
    assert_eq!(all.len(), 6);
    for review in &all {
        let matching = all
            .iter()
            .filter(|r| r.is_for(&review.reviewer, &review.paper_id))
            .count();
        assert_eq!(matching, 1);
        assert_eq!(review.score, score(3));
    }
}

#[test]
fn second_handle_sees_writes_immediately() {
    let dir = TempDir::new().unwrap();
    let mut writer = service_in(&dir);
    let reader = service_in(&dir);

    writer.save("Ann", "1", score(5), "").unwrap();
    assert_eq!(reader.state_of("Ann", "1"), ReviewState::Saved);
}

#[test]
fn corrupt_blob_is_treated_as_empty_and_overwritten() {
    let dir = TempDir::new().unwrap();
    let mut kv = FileKvStore::new(dir.path());
    kv.set(REVIEWS_KEY, "[{\"reviewer\": 7").unwrap();

    let mut svc = service_in(&dir);
    assert!(svc.store().load_all().is_empty());
    assert_eq!(svc.state_of("Ann", "1"), ReviewState::Unreviewed);

    svc.save("Ann", "1", score(2), "").unwrap();
    assert_eq!(svc.store().load_all().len(), 1);
}

#[test]
fn persisted_blob_matches_review_schema() {
    let dir = TempDir::new().unwrap();
    let mut svc = service_in(&dir);
    svc.save("Ann", "1", score(2), "fine").unwrap();
    svc.save("Bob", "1", score(5), "").unwrap();
    svc.finalize("Bob", "1").unwrap();

    let raw = FileKvStore::new(dir.path())
        .get(REVIEWS_KEY)
        .unwrap()
        .unwrap();
    let instance: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let schema = serde_json::to_value(schema_for!(Vec<Review>)).unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn export_reads_back_through_csv() {
    let dir = TempDir::new().unwrap();
    let mut svc = service_in(&dir);
    svc.save("Ann", "1", score(4), "says \"fine\"").unwrap();
    svc.save("Ann", "2", score(1), "=SUM(A1)").unwrap();
    svc.finalize("Ann", "2").unwrap();

    let file = svc.export("Ann").unwrap();
    assert!(file.bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let parsed = shinsa_csv::parse_export(&file.bytes).unwrap();
    assert_eq!(parsed, svc.store().reviews_by("Ann"));
}

#[test]
fn storage_failure_surfaces_as_io() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let mut svc = ReviewService::new(FileKvStore::new(&blocker));
    let err = svc.save("Ann", "1", score(3), "").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
