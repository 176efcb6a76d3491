//! Puzzle manifest model and answer evaluator for VÅRKAMP.
//!
//! The manifest is a JSON document loaded once at startup. It holds the
//! ordered puzzle list, the static content pages and the set of names
//! accepted by `name` puzzles.
//!
//! Evaluation is a pure function of the puzzle, the raw input and the number
//! of whole minutes elapsed since the session started. It performs no I/O and
//! never mutates anything; counting failures and revealing hints is the
//! session controller's job.

mod answer;
mod definition;
mod error;
mod evaluator;
mod magic;
mod manifest;

pub use answer::AnswerValue;
pub use definition::{PuzzleDefinition, PuzzleKind};
pub use error::{ManifestError, ManifestResult};
pub use evaluator::{AnswerInput, Evaluation, Evaluator, Rejection, is_prime};
pub use magic::{MagicCell, MagicSquare, parse_cell};
pub use manifest::{Manifest, StaticPage, ValidNameSet};
