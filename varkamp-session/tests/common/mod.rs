//! Shared fixtures for session tests.

#![allow(dead_code)]

use varkamp_puzzle::Manifest;
use varkamp_session::{Session, SessionConfig};
use varkamp_storage::MemoryStore;
use varkamp_types::{ManualClock, Timestamp};

/// 2024-05-06 12:00:00 UTC.
pub const T0: u64 = 1_714_996_800_000;

pub const MANIFEST: &str = r#"{
  "puzzles": [
    { "type": "text",  "prompt": "Huvudstad?", "hint": "Vid Mälaren", "answer": "Stockholm" },
    { "type": "prime", "prompt": "Vänta in rätt minut" },
    { "type": "word",  "prompt": "Trädet", "hint": "", "answer": "oak tree" },
    { "type": "magic", "prompt": "Fyll rutorna", "hint": "Summan är 15", "size": 3, "target": 15,
      "grid": [[2, "", 6], ["", 5, ""], [4, "", 8]] },
    { "type": "name",  "prompt": "Ditt namn?" }
  ],
  "staticPages": {
    "help": { "title": "Hjälp", "text": "Ring domaren.", "icon": "assets/icons/help.png" }
  },
  "validNames": ["Ekorren"]
}"#;

pub fn manifest() -> Manifest {
    Manifest::from_json(MANIFEST).unwrap()
}

pub fn clock() -> ManualClock {
    ManualClock::new(Timestamp::from_millis(T0))
}

pub fn open_with(store: MemoryStore, clock: &ManualClock) -> Session<MemoryStore, ManualClock> {
    Session::open(manifest(), store, clock.clone(), SessionConfig::default()).unwrap()
}

pub fn fresh(clock: &ManualClock) -> Session<MemoryStore, ManualClock> {
    open_with(MemoryStore::new(), clock)
}

/// A store holding a started record.
pub fn persisted(start: u64, current: &str) -> MemoryStore {
    MemoryStore::with_entries([
        ("varkamp_started", "1".to_string()),
        ("varkamp_startTime", start.to_string()),
        ("varkamp_current", current.to_string()),
    ])
}

/// Correct magic-square cells for [`MANIFEST`].
pub const MAGIC_CELLS: [&str; 4] = ["7", "9", "1", "3"];
