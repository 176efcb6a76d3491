use std::fmt;
use varkamp_types::Timestamp;

/// Mutable session state, owned by [`crate::Session`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) current_index: usize,
    pub(crate) started_at: Option<Timestamp>,
    pub(crate) fail_count: u32,
    pub(crate) hint_revealed: bool,
}

impl SessionState {
    /// Index of the puzzle being played; the puzzle count once completed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// When the session started. Fixed once set.
    #[must_use]
    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Wrong answers on the current puzzle.
    #[must_use]
    pub fn fail_count(&self) -> u32 {
        self.fail_count
    }

    /// Whether the current puzzle's hint has been revealed.
    #[must_use]
    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    /// Moves to `index`, clearing the per-puzzle counters.
    pub(crate) fn enter(&mut self, index: usize) {
        self.current_index = index;
        self.fail_count = 0;
        self.hint_revealed = false;
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    /// Playing the puzzle at this index.
    InProgress(usize),
    /// Every puzzle solved; only a reset leaves this phase.
    Completed,
}

impl Phase {
    pub(crate) fn of(state: &SessionState, puzzle_count: usize) -> Self {
        if !state.started() {
            Self::NotStarted
        } else if state.current_index >= puzzle_count {
            Self::Completed
        } else {
            Self::InProgress(state.current_index)
        }
    }
}

/// 1-based position in the puzzle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Puzzle {} of {}", self.position, self.total)
    }
}
