//! Session controller for VÅRKAMP puzzle hunts.
//!
//! A [`Session`] owns the manifest, the persisted resume state and a clock,
//! and moves through three phases:
//!
//! ```text
//! NotStarted --start()--> InProgress(0)
//! InProgress(i) --accepted--> InProgress(i + 1) | Completed
//! InProgress(i) --wrong answer--> InProgress(i), fail count + 1
//! InProgress(i) --prime gate / incomplete--> InProgress(i), unchanged
//! any --reset()--> NotStarted
//! ```
//!
//! The persisted record is written exactly at these transitions, through a
//! single save/load pair over a [`varkamp_storage::KeyValueStore`].
//!
//! # Example
//!
//! ```
//! use varkamp_puzzle::{AnswerInput, Manifest};
//! use varkamp_session::{Phase, Session, SessionConfig};
//! use varkamp_storage::MemoryStore;
//! use varkamp_types::SystemClock;
//!
//! let manifest = Manifest::from_json(
//!     r#"{"puzzles": [{"type": "text", "prompt": "Capital?", "answer": "Stockholm"}]}"#,
//! ).unwrap();
//! let mut session =
//!     Session::open(manifest, MemoryStore::new(), SystemClock, SessionConfig::default()).unwrap();
//!
//! session.start().unwrap();
//! let outcome = session.submit_answer(&AnswerInput::text("stockholm")).unwrap();
//! assert_eq!(outcome.phase, Phase::Completed);
//! ```

mod config;
mod error;
mod record;
mod session;
mod state;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use record::SessionRecord;
pub use session::{Session, SubmitOutcome};
pub use state::{Phase, Progress, SessionState};
