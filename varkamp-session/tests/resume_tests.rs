mod common;

use common::{T0, clock, open_with, persisted};
use pretty_assertions::assert_eq;
use std::time::Duration;
use varkamp_puzzle::AnswerInput;
use varkamp_session::{Phase, Session, SessionConfig};
use varkamp_storage::{FileStore, KeyValueStore, MemoryStore};
use varkamp_types::Timestamp;

// ── Resume from persisted record ─────────────────────────────────

#[test]
fn resumes_at_persisted_index_with_persisted_start_time() {
    let clock = clock();
    // Started seven and a half minutes ago.
    let store = persisted(T0 - 450_000, "3");
    let session = open_with(store, &clock);

    assert_eq!(session.phase(), Phase::InProgress(3));
    assert_eq!(session.fail_count(), 0);
    assert_eq!(session.elapsed_time(), "07:30");
    assert_eq!(
        session.state().started_at(),
        Some(Timestamp::from_millis(T0 - 450_000))
    );
}

#[test]
fn resume_at_first_puzzle_is_still_a_resume() {
    let clock = clock();
    let session = open_with(persisted(T0 - 5_000, "0"), &clock);
    assert_eq!(session.phase(), Phase::InProgress(0));
    assert_eq!(session.elapsed_time(), "00:05");
}

#[test]
fn resume_does_not_rewrite_a_sound_record() {
    let clock = clock();
    let store = persisted(T0 - 1_000, "2");
    let before = store.clone();
    let session = open_with(store, &clock);
    assert_eq!(session.into_store(), before);
}

#[test]
fn without_started_flag_nothing_is_resumed() {
    let clock = clock();
    let store = MemoryStore::with_entries([
        ("varkamp_startTime", T0.to_string()),
        ("varkamp_current", "3".to_string()),
    ]);
    let session = open_with(store, &clock);
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn started_flag_must_be_one() {
    let clock = clock();
    let mut store = persisted(T0, "1");
    store.set("varkamp_started", "true").unwrap();
    assert_eq!(open_with(store, &clock).phase(), Phase::NotStarted);
}

// ── Repairing damaged records ────────────────────────────────────

#[test]
fn zero_start_time_restarts_clock() {
    let clock = clock();
    let session = open_with(persisted(0, "1"), &clock);
    assert_eq!(session.phase(), Phase::InProgress(1));
    assert_eq!(session.elapsed_time(), "00:00");
    assert_eq!(
        session.store().get("varkamp_startTime").unwrap(),
        Some(T0.to_string())
    );
}

#[test]
fn malformed_start_time_restarts_clock_and_is_written_back() {
    let clock = clock();
    let mut store = persisted(0, "2");
    store.set("varkamp_startTime", "soon").unwrap();

    let session = open_with(store, &clock);
    assert_eq!(session.phase(), Phase::InProgress(2));
    assert_eq!(session.elapsed_time(), "00:00");
    assert_eq!(
        session.store().get("varkamp_startTime").unwrap(),
        Some(T0.to_string())
    );
}

#[test]
fn missing_index_resumes_at_first_puzzle() {
    let clock = clock();
    let mut store = persisted(T0, "x");
    store.remove("varkamp_current").unwrap();

    let session = open_with(store, &clock);
    assert_eq!(session.phase(), Phase::InProgress(0));
    assert_eq!(
        session.store().get("varkamp_current").unwrap().as_deref(),
        Some("0")
    );
}

#[test]
fn index_past_the_end_resumes_as_completed() {
    let clock = clock();
    let session = open_with(persisted(T0, "42"), &clock);
    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(
        session.store().get("varkamp_current").unwrap().as_deref(),
        Some("5")
    );
}

// ── Across process restarts ──────────────────────────────────────

#[test]
fn progress_survives_reopen() {
    let clock = clock();
    let mut session = common::fresh(&clock);
    session.start().unwrap();
    session
        .submit_answer(&AnswerInput::text("Stockholm"))
        .unwrap();
    let store = session.into_store();

    clock.advance(Duration::from_secs(125));
    let reopened = open_with(store, &clock);
    assert_eq!(reopened.phase(), Phase::InProgress(1));
    assert_eq!(reopened.elapsed_time(), "02:05");
    assert_eq!(reopened.fail_count(), 0);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = clock();

    let mut session = Session::open(
        common::manifest(),
        FileStore::open(&path).unwrap(),
        clock.clone(),
        SessionConfig::default(),
    )
    .unwrap();
    session.start().unwrap();
    session
        .submit_answer(&AnswerInput::text("stockholm"))
        .unwrap();
    drop(session);

    clock.advance(Duration::from_secs(61));
    let session = Session::open(
        common::manifest(),
        FileStore::open(&path).unwrap(),
        clock.clone(),
        SessionConfig::default(),
    )
    .unwrap();
    assert_eq!(session.phase(), Phase::InProgress(1));
    assert_eq!(session.elapsed_time(), "01:01");
}

#[test]
fn key_prefix_namespaces_the_record() {
    let clock = clock();
    let config = SessionConfig {
        key_prefix: "hunt2_".to_string(),
        ..SessionConfig::default()
    };
    let mut session =
        Session::open(common::manifest(), MemoryStore::new(), clock.clone(), config.clone())
            .unwrap();
    session.start().unwrap();
    let store = session.into_store();
    assert_eq!(store.get("hunt2_started").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("varkamp_started").unwrap(), None);

    let resumed = Session::open(common::manifest(), store, clock, config).unwrap();
    assert_eq!(resumed.phase(), Phase::InProgress(0));
}

#[test]
fn fail_count_is_not_persisted() {
    let clock = clock();
    let mut session = common::fresh(&clock);
    session.start().unwrap();
    session.submit_answer(&AnswerInput::text("Malmö")).unwrap();
    session.submit_answer(&AnswerInput::text("Lund")).unwrap();
    assert!(session.state().hint_revealed());

    let reopened = open_with(session.into_store(), &clock);
    assert_eq!(reopened.phase(), Phase::InProgress(0));
    assert_eq!(reopened.fail_count(), 0);
    assert!(!reopened.state().hint_revealed());
}
