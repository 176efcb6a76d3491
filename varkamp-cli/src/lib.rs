//! Terminal rendering for the VÅRKAMP puzzle hunt.
//!
//! Everything here turns session state into text or text into input; the
//! binary wires it to stdin/stdout.

use std::fmt::Write as _;
use std::path::PathBuf;
use varkamp_puzzle::{AnswerInput, Evaluation, MagicCell, MagicSquare, PuzzleDefinition, PuzzleKind, Rejection, StaticPage};
use varkamp_session::{Phase, Progress, SubmitOutcome};

/// Manifest location used when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "assets/data/puzzles.json";

/// In-game commands, listed by `:help`.
pub const HELP: &str = "\
Type your answer and press Enter. Magic squares take the missing numbers
in reading order, separated by spaces or commas.

  :time        show the elapsed time
  :hint        show the hint, once revealed
  :page <key>  show a static page (e.g. help)
  :help        show this text
  :quit        leave; progress is saved";

/// Default session file: `<data dir>/varkamp/session.json`.
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("varkamp")
        .join("session.json")
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(AnswerInput),
    Time,
    Hint,
    Page(String),
    Help,
    Quit,
}

/// Parses a line. Lines starting with `:` are commands, anything else is an
/// answer. Unknown commands show the help text.
#[must_use]
pub fn parse_line(line: &str) -> Command {
    let Some(rest) = line.trim().strip_prefix(':') else {
        return Command::Answer(AnswerInput::text(line));
    };
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some("time"), None) => Command::Time,
        (Some("hint"), None) => Command::Hint,
        (Some("page"), Some(key)) => Command::Page(key.to_string()),
        (Some("quit" | "q"), None) => Command::Quit,
        _ => Command::Help,
    }
}

/// Renders the card for the current puzzle.
#[must_use]
pub fn render_puzzle(puzzle: &PuzzleDefinition, progress: Progress, elapsed: &str) -> String {
    let mut out = format!("[{elapsed}] {progress}\n\n{}\n", puzzle.prompt);
    if let Some(img) = &puzzle.img {
        let _ = writeln!(out, "(image: {img})");
    }
    if let Some(src) = &puzzle.src {
        let _ = writeln!(out, "(audio: {src})");
    }
    match &puzzle.kind {
        PuzzleKind::Magic(square) => {
            out.push('\n');
            out.push_str(&render_grid(square));
            let _ = writeln!(
                out,
                "Every row, column and diagonal must sum to {}. Enter the {} missing numbers.",
                square.target,
                square.blank_count()
            );
        }
        PuzzleKind::Prime => {
            out.push_str("Submit during the right minute.\n");
        }
        _ => {}
    }
    out
}

/// Renders a magic-square grid with blanks shown as `__`.
#[must_use]
pub fn render_grid(square: &MagicSquare) -> String {
    let width = square
        .grid
        .iter()
        .flatten()
        .map(|cell| match cell {
            MagicCell::Given(n) => n.to_string().len(),
            MagicCell::Blank => 2,
        })
        .max()
        .unwrap_or(2);

    let mut out = String::new();
    for row in &square.grid {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                MagicCell::Given(n) => format!("{n:>width$}"),
                MagicCell::Blank => format!("{:>width$}", "__"),
            })
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" "));
    }
    out
}

/// Renders the reaction to a submission.
#[must_use]
pub fn render_outcome(outcome: &SubmitOutcome, hint: Option<&str>) -> String {
    match outcome.evaluation {
        Evaluation::Accepted if outcome.phase == Phase::Completed => {
            "Correct! That was the last puzzle.".to_string()
        }
        Evaluation::Accepted => "Correct!".to_string(),
        Evaluation::Rejected(Rejection::WrongAnswer) => match hint.filter(|_| outcome.hint_visible) {
            Some(hint) => format!("Wrong, try again!\nHint: {hint}"),
            None => "Wrong, try again!".to_string(),
        },
        Evaluation::Rejected(Rejection::NotPrimeMinute) => "Wait for a prime minute!".to_string(),
        Evaluation::Rejected(Rejection::Incomplete) => "Fill in every cell!".to_string(),
    }
}

/// Renders a static page.
#[must_use]
pub fn render_page(page: &StaticPage) -> String {
    let mut out = format!("{}\n{}\n\n{}\n", page.title, "=".repeat(page.title.chars().count()), page.text);
    if let Some(full) = page.full.as_ref().or(page.thumb.as_ref()) {
        let _ = writeln!(out, "\n(image: {full})");
    }
    out
}

/// One-line session summary for `varkamp status`.
#[must_use]
pub fn render_status(phase: Phase, progress: Option<Progress>, elapsed: &str) -> String {
    match (phase, progress) {
        (Phase::NotStarted, _) => "Not started.".to_string(),
        (Phase::Completed, _) => format!("All puzzles solved. Time: {elapsed}"),
        (Phase::InProgress(_), Some(progress)) => format!("{progress}, time {elapsed}"),
        (Phase::InProgress(index), None) => format!("Puzzle {}, time {elapsed}", index + 1),
    }
}
