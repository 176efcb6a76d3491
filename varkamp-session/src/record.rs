//! The persisted resume record.
//!
//! Three string entries, matching what earlier releases wrote:
//!
//! | key | value |
//! |---|---|
//! | `<prefix>started` | `"1"` once started, absent otherwise |
//! | `<prefix>startTime` | session start, epoch milliseconds |
//! | `<prefix>current` | index of the puzzle being played |

use crate::{SessionConfig, SessionResult};
use tracing::{debug, warn};
use varkamp_storage::KeyValueStore;
use varkamp_types::Timestamp;

const STARTED: &str = "1";

/// Resume state of a started session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord {
    pub start_time: Timestamp,
    /// Equal to the puzzle count once every puzzle is solved.
    pub current_index: usize,
}

/// A record read back from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Loaded {
    pub(crate) record: SessionRecord,
    /// True if a missing or malformed entry was replaced with a default.
    pub(crate) repaired: bool,
}

impl SessionRecord {
    /// Writes all three entries.
    pub fn save<S: KeyValueStore>(&self, store: &mut S, config: &SessionConfig) -> SessionResult<()> {
        store.set(&config.started_key(), STARTED)?;
        store.set(&config.start_time_key(), &self.start_time.to_string())?;
        store.set(&config.current_key(), &self.current_index.to_string())?;
        debug!(
            start_time = %self.start_time,
            current_index = self.current_index,
            "saved session record"
        );
        Ok(())
    }

    /// Removes all three entries.
    pub fn clear<S: KeyValueStore>(store: &mut S, config: &SessionConfig) -> SessionResult<()> {
        store.remove(&config.started_key())?;
        store.remove(&config.start_time_key())?;
        store.remove(&config.current_key())?;
        Ok(())
    }

    /// Reads the record if the started flag is set.
    ///
    /// A missing, malformed or zero start time falls back to `now`; a missing
    /// or malformed index falls back to 0.
    pub(crate) fn load<S: KeyValueStore>(
        store: &S,
        config: &SessionConfig,
        now: Timestamp,
    ) -> SessionResult<Option<Loaded>> {
        if store.get(&config.started_key())?.as_deref() != Some(STARTED) {
            return Ok(None);
        }

        let mut repaired = false;

        let start_time = match store.get(&config.start_time_key())? {
            Some(raw) => raw.parse::<Timestamp>().ok().filter(|t| t.as_millis() != 0),
            None => None,
        };
        let start_time = start_time.unwrap_or_else(|| {
            warn!("persisted start time missing or malformed, restarting the clock");
            repaired = true;
            now
        });

        let current_index = match store.get(&config.current_key())? {
            Some(raw) => raw.trim().parse::<usize>().ok(),
            None => None,
        };
        let current_index = current_index.unwrap_or_else(|| {
            warn!("persisted puzzle index missing or malformed, resuming at the first puzzle");
            repaired = true;
            0
        });

        Ok(Some(Loaded {
            record: SessionRecord {
                start_time,
                current_index,
            },
            repaired,
        }))
    }
}
