use crate::{AnswerValue, MagicSquare};
use serde::{Deserialize, Serialize};

/// One puzzle from the manifest.
///
/// The display fields are shared by every puzzle type; everything the
/// evaluator needs lives in [`PuzzleKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Text shown to the player. Never inspected by the evaluator.
    pub prompt: String,
    /// Revealed after repeated wrong answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Image asset shown with the puzzle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Audio asset played with the puzzle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(flatten)]
    pub kind: PuzzleKind,
}

impl PuzzleDefinition {
    /// Returns the hint if it has any visible text.
    #[must_use]
    pub fn visible_hint(&self) -> Option<&str> {
        self.hint.as_deref().filter(|h| !h.trim().is_empty())
    }
}

/// The closed set of puzzle types, each carrying only what its check needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PuzzleKind {
    /// Any name from the manifest's valid-name set.
    Name,
    Text { answer: AnswerValue },
    Number { answer: AnswerValue },
    /// Counting objects in a picture.
    Count { answer: AnswerValue },
    /// Whitespace-insensitive word answer.
    Word { answer: AnswerValue },
    /// Hidden-image riddle. Compared against the answer exactly as written.
    Stego { answer: AnswerValue },
    /// Reversed-audio riddle. Compared against the answer exactly as written.
    Audio { answer: AnswerValue },
    /// Solvable only while the elapsed minute count is prime.
    Prime,
    /// Any of several spellings of a decoded morse message.
    Morse { answers: Vec<String> },
    Magic(MagicSquare),
}

impl PuzzleKind {
    /// The manifest `type` tag.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Text { .. } => "text",
            Self::Number { .. } => "number",
            Self::Count { .. } => "count",
            Self::Word { .. } => "word",
            Self::Stego { .. } => "stego",
            Self::Audio { .. } => "audio",
            Self::Prime => "prime",
            Self::Morse { .. } => "morse",
            Self::Magic(_) => "magic",
        }
    }

    /// Checks the structural invariants the evaluator relies on.
    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Self::Morse { answers } if answers.is_empty() => {
                Err("morse puzzle has no accepted answers".to_string())
            }
            Self::Magic(square) => square.validate(),
            _ => Ok(()),
        }
    }
}
