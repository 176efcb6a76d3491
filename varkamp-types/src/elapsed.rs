use serde::{Deserialize, Serialize};
use std::fmt;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;

/// A span of elapsed session time with millisecond resolution.
///
/// Displays as `MM:SS`. Minutes are zero-padded to two digits and are not
/// wrapped into hours, so a long session shows `125:07`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Elapsed(u64);

impl Elapsed {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0);

    /// Creates an elapsed span from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the span in milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Whole minutes elapsed, rounded down.
    #[must_use]
    pub const fn whole_minutes(&self) -> u64 {
        self.0 / MILLIS_PER_MINUTE
    }

    /// Whole seconds within the current minute.
    #[must_use]
    pub const fn seconds_of_minute(&self) -> u64 {
        (self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.whole_minutes(), self.seconds_of_minute())
    }
}
