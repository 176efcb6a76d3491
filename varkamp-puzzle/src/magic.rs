//! Magic-square puzzles.
//!
//! The manifest grid mixes pre-filled integers with blank cells (`""`). The
//! player fills the blanks in row-major order; the completed matrix is magic
//! when every row, every column and both main diagonals sum to the target.

use crate::evaluator::{Evaluation, Rejection};
use serde::{Deserialize, Serialize};

/// A magic-square puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicSquare {
    /// Side length of the square.
    pub size: usize,
    /// Required sum of every line.
    pub target: i64,
    /// `size` rows of `size` cells each.
    pub grid: Vec<Vec<MagicCell>>,
}

/// One cell of a magic-square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum MagicCell {
    /// A pre-filled value.
    Given(i64),
    /// A cell the player must fill.
    Blank,
}

/// Manifest representation: a number, or a string that is empty for blanks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Number(i64),
    Text(String),
}

impl TryFrom<RawCell> for MagicCell {
    type Error = String;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match raw {
            RawCell::Number(n) => Ok(Self::Given(n)),
            RawCell::Text(s) if s.trim().is_empty() => Ok(Self::Blank),
            RawCell::Text(s) => s
                .trim()
                .parse()
                .map(Self::Given)
                .map_err(|_| format!("invalid magic-square cell {s:?}")),
        }
    }
}

impl From<MagicCell> for RawCell {
    fn from(cell: MagicCell) -> Self {
        match cell {
            MagicCell::Given(n) => Self::Number(n),
            MagicCell::Blank => Self::Text(String::new()),
        }
    }
}

impl MagicSquare {
    /// Number of cells the player has to fill.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| matches!(c, MagicCell::Blank))
            .count()
    }

    /// Fills the blank cells in row-major order.
    ///
    /// Returns `None` unless exactly one value is supplied per blank.
    #[must_use]
    pub fn fill(&self, values: &[i64]) -> Option<Vec<Vec<i64>>> {
        if values.len() != self.blank_count() {
            return None;
        }
        let mut next = values.iter();
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        MagicCell::Given(n) => Some(*n),
                        MagicCell::Blank => next.next().copied(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns true if every row, column and both diagonals sum to `target`.
    #[must_use]
    pub fn is_magic(matrix: &[Vec<i64>], target: i64) -> bool {
        let size = matrix.len();
        if size == 0 || matrix.iter().any(|row| row.len() != size) {
            return false;
        }
        let target = i128::from(target);

        let rows_ok = matrix.iter().all(|row| line_sum(row.iter().copied()) == target);
        let cols_ok = (0..size).all(|c| line_sum(matrix.iter().map(|row| row[c])) == target);
        let diag = line_sum((0..size).map(|r| matrix[r][r]));
        let anti = line_sum((0..size).map(|r| matrix[r][size - 1 - r]));

        rows_ok && cols_ok && diag == target && anti == target
    }

    /// Checks the player's cell inputs against this square.
    pub(crate) fn check<S: AsRef<str>>(&self, cells: &[S]) -> Evaluation {
        let Some(values) = cells
            .iter()
            .map(|c| parse_cell(c.as_ref()))
            .collect::<Option<Vec<_>>>()
        else {
            return Evaluation::Rejected(Rejection::Incomplete);
        };
        let Some(matrix) = self.fill(&values) else {
            return Evaluation::Rejected(Rejection::Incomplete);
        };
        if Self::is_magic(&matrix, self.target) {
            Evaluation::Accepted
        } else {
            Evaluation::Rejected(Rejection::WrongAnswer)
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("magic square has size 0".to_string());
        }
        if self.grid.len() != self.size {
            return Err(format!(
                "magic square declares size {} but has {} rows",
                self.size,
                self.grid.len()
            ));
        }
        if let Some((r, row)) = self.grid.iter().enumerate().find(|(_, row)| row.len() != self.size) {
            return Err(format!(
                "magic square row {r} has {} cells, expected {}",
                row.len(),
                self.size
            ));
        }
        Ok(())
    }
}

fn line_sum(cells: impl Iterator<Item = i64>) -> i128 {
    cells.map(i128::from).sum()
}

/// Parses a cell the way a browser number field's leading integer reads.
///
/// Leading whitespace and an optional sign are accepted, then a run of
/// decimal digits; anything after the digits is ignored. Returns `None` when
/// there are no digits or the value does not fit in an `i64`.
#[must_use]
pub fn parse_cell(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
