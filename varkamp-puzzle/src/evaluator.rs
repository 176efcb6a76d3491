//! Answer evaluation.
//!
//! Normalization rules per puzzle type:
//!
//! | type | input | compared with |
//! |---|---|---|
//! | `name` | trimmed, lowercased | the valid-name set |
//! | `text`, `number`, `count` | trimmed, lowercased | answer, lowercased |
//! | `word`, `morse` | trimmed, lowercased, whitespace removed | answer(s), same treatment |
//! | `stego`, `audio` | trimmed, lowercased | answer exactly as written |
//! | `prime` | ignored | gate on the elapsed minute count |
//! | `magic` | each cell parsed as an integer | row/column/diagonal sums |
//!
//! The `stego`/`audio` rule lowercases only the input, so a configured answer
//! containing capitals can never match. Manifests keep those answers
//! lowercase; the rule itself is kept as shipped.

use crate::{PuzzleDefinition, PuzzleKind, ValidNameSet};
use std::fmt;
use tracing::debug;

/// Raw player input for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    /// A single text field.
    Text(String),
    /// One entry per blank magic-square cell, in row-major order.
    Cells(Vec<String>),
}

impl AnswerInput {
    /// Creates a text input.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Creates a per-cell input.
    pub fn cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Cells(cells.into_iter().map(Into::into).collect())
    }

    /// The text form. Cell input has no single text value and reads as empty.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Cells(_) => "",
        }
    }

    /// The per-cell form. Text input is split on whitespace and commas.
    #[must_use]
    pub fn as_cells(&self) -> Vec<&str> {
        match self {
            Self::Text(s) => s
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect(),
            Self::Cells(cells) => cells.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for AnswerInput {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for AnswerInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The answer is wrong.
    WrongAnswer,
    /// A `prime` puzzle was submitted outside a prime minute.
    NotPrimeMinute,
    /// A magic-square cell is empty or unparseable.
    Incomplete,
}

impl Rejection {
    /// Only wrong answers count toward revealing the hint.
    #[must_use]
    pub fn counts_as_failure(&self) -> bool {
        matches!(self, Self::WrongAnswer)
    }

    /// Short machine-readable reason.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::WrongAnswer => "wrong answer",
            Self::NotPrimeMinute => "not a prime minute",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// The verdict on one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    Accepted,
    Rejected(Rejection),
}

impl Evaluation {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(r) => Some(*r),
        }
    }

    /// Returns true if this verdict should increment the fail counter.
    #[must_use]
    pub fn counts_as_failure(&self) -> bool {
        self.rejection().is_some_and(|r| r.counts_as_failure())
    }

    fn from_match(ok: bool) -> Self {
        if ok {
            Self::Accepted
        } else {
            Self::Rejected(Rejection::WrongAnswer)
        }
    }
}

/// Decides whether an input solves a puzzle.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    valid_names: &'a ValidNameSet,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that accepts `valid_names` for `name` puzzles.
    #[must_use]
    pub fn new(valid_names: &'a ValidNameSet) -> Self {
        Self { valid_names }
    }

    /// Evaluates `input` against `puzzle`.
    ///
    /// `elapsed_minutes` is the number of whole minutes since the session
    /// started, read at submission time.
    #[must_use]
    pub fn evaluate(
        &self,
        puzzle: &PuzzleDefinition,
        input: &AnswerInput,
        elapsed_minutes: u64,
    ) -> Evaluation {
        let verdict = self.evaluate_kind(&puzzle.kind, input, elapsed_minutes);
        debug!(
            puzzle_type = puzzle.kind.type_name(),
            elapsed_minutes,
            ?verdict,
            "evaluated submission"
        );
        verdict
    }

    fn evaluate_kind(&self, kind: &PuzzleKind, input: &AnswerInput, elapsed_minutes: u64) -> Evaluation {
        let ans = normalize(input.as_text());
        match kind {
            PuzzleKind::Name => Evaluation::from_match(self.valid_names.contains(&ans)),
            PuzzleKind::Text { answer }
            | PuzzleKind::Number { answer }
            | PuzzleKind::Count { answer } => {
                Evaluation::from_match(ans == answer.to_string().to_lowercase())
            }
            PuzzleKind::Word { answer } => Evaluation::from_match(
                strip_whitespace(&ans) == strip_whitespace(&answer.to_string().to_lowercase()),
            ),
            PuzzleKind::Stego { answer } | PuzzleKind::Audio { answer } => {
                Evaluation::from_match(ans == answer.to_string())
            }
            PuzzleKind::Prime => {
                if is_prime(elapsed_minutes) {
                    Evaluation::Accepted
                } else {
                    Evaluation::Rejected(Rejection::NotPrimeMinute)
                }
            }
            PuzzleKind::Morse { answers } => {
                let cleaned = strip_whitespace(&ans);
                Evaluation::from_match(
                    answers
                        .iter()
                        .any(|a| strip_whitespace(&a.to_lowercase()) == cleaned),
                )
            }
            PuzzleKind::Magic(square) => square.check(&input.as_cells()),
        }
    }
}

/// Trial-division primality test. Values below 2 are not prime.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
