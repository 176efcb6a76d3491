mod common;

use common::{SAMPLE_MANIFEST, lo_shu};
use pretty_assertions::assert_eq;
use std::io::Write;
use varkamp_puzzle::{AnswerValue, Manifest, ManifestError, PuzzleKind, ValidNameSet};

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_every_puzzle_type_in_order() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    let types: Vec<_> = manifest.puzzles.iter().map(|p| p.kind.type_name()).collect();
    assert_eq!(
        types,
        vec!["name", "text", "number", "count", "word", "stego", "audio", "prime", "morse", "magic"]
    );
    assert_eq!(manifest.len(), 10);
    assert!(!manifest.is_empty());
}

#[test]
fn numeric_answers_keep_their_type() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    assert_eq!(
        manifest.puzzles[2].kind,
        PuzzleKind::Number {
            answer: AnswerValue::Integer(42)
        }
    );
    assert_eq!(
        manifest.puzzles[3].kind,
        PuzzleKind::Count {
            answer: AnswerValue::Text("12".to_string())
        }
    );
}

#[test]
fn display_fields_live_outside_the_kind() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    let count = manifest.puzzle(3).unwrap();
    assert_eq!(count.img.as_deref(), Some("assets/img/oaks.jpg"));
    assert_eq!(count.hint, None);

    let morse = manifest.puzzle(8).unwrap();
    assert_eq!(morse.src.as_deref(), Some("assets/audio/morse.mp3"));
    assert_eq!(
        morse.kind,
        PuzzleKind::Morse {
            answers: vec!["SOS".to_string(), "s o s".to_string()]
        }
    );
}

#[test]
fn magic_grid_blanks_are_empty_strings() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    assert_eq!(manifest.puzzles[9].kind, PuzzleKind::Magic(lo_shu()));
}

#[test]
fn visible_hint_skips_blank_hints() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    assert_eq!(manifest.puzzles[1].visible_hint(), Some("Vid Mälaren"));
    assert_eq!(manifest.puzzles[2].visible_hint(), None);
    assert_eq!(manifest.puzzles[3].visible_hint(), None);
}

#[test]
fn out_of_range_puzzle_is_none() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    assert!(manifest.puzzle(10).is_none());
}

// ── Static pages & names ─────────────────────────────────────────

#[test]
fn static_pages_by_key() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    let var = manifest.static_page("var").unwrap();
    assert_eq!(var.title, "Våren");
    assert_eq!(var.text, "Rad ett\nRad två");
    assert_eq!(var.full.as_deref(), Some("assets/img/var.jpg"));

    let help = manifest.static_page("help").unwrap();
    assert_eq!(help.thumb, None);
    assert!(manifest.static_page("kamp").is_none());
}

#[test]
fn valid_names_are_normalized() {
    let manifest = Manifest::from_json(SAMPLE_MANIFEST).unwrap();
    assert_eq!(manifest.valid_names.len(), 3);
    assert!(manifest.valid_names.contains("rävis"));
    assert!(manifest.valid_names.contains("EKORREN"));
    assert!(!manifest.valid_names.contains("räv"));
}

#[test]
fn valid_name_set_drops_empty_entries() {
    let names = ValidNameSet::new(["", "  ", "Uggla"]);
    assert_eq!(names.len(), 1);
    assert!(ValidNameSet::default().is_empty());
}

#[test]
fn optional_sections_default_to_empty() {
    let manifest = Manifest::from_json(r#"{"puzzles": []}"#).unwrap();
    assert!(manifest.is_empty());
    assert!(manifest.static_pages.is_empty());
    assert!(manifest.valid_names.is_empty());
}

// ── Invalid manifests ────────────────────────────────────────────

#[test]
fn unknown_type_is_a_parse_error() {
    let err = Manifest::from_json(r#"{"puzzles": [{"type": "riddle", "prompt": "?"}]}"#)
        .unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn missing_answer_is_a_parse_error() {
    let err = Manifest::from_json(r#"{"puzzles": [{"type": "text", "prompt": "?"}]}"#)
        .unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn bad_magic_cell_is_a_parse_error() {
    let json = r#"{"puzzles": [{"type": "magic", "prompt": "?", "size": 1, "target": 1,
                  "grid": [["x"]]}]}"#;
    assert!(matches!(
        Manifest::from_json(json).unwrap_err(),
        ManifestError::Parse(_)
    ));
}

#[test]
fn magic_grid_shape_is_validated() {
    let json = r#"{"puzzles": [
        {"type": "prime", "prompt": "?"},
        {"type": "magic", "prompt": "?", "size": 2, "target": 2, "grid": [[1, 1], [1]]}
    ]}"#;
    match Manifest::from_json(json).unwrap_err() {
        ManifestError::InvalidPuzzle { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("row 1"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn morse_needs_answers() {
    let json = r#"{"puzzles": [{"type": "morse", "prompt": "?", "answers": []}]}"#;
    assert!(matches!(
        Manifest::from_json(json).unwrap_err(),
        ManifestError::InvalidPuzzle { index: 0, .. }
    ));
}

// ── Async load ───────────────────────────────────────────────────

#[tokio::test]
async fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_MANIFEST.as_bytes()).unwrap();

    let manifest = Manifest::load(file.path()).await.unwrap();
    assert_eq!(manifest.len(), 10);
}

#[tokio::test]
async fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzles.json");

    let err = Manifest::load(&path).await.unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("puzzles.json"));
}
