//! Core type definitions for the VÅRKAMP puzzle engine.
//!
//! This crate defines the small, dependency-free types shared by the
//! evaluator, the storage layer and the session controller:
//! - Wall-clock timestamps (milliseconds since the Unix epoch)
//! - A `Clock` seam so the controller can be driven by a manual clock in tests
//! - Elapsed-time values with the `MM:SS` display used by the game timer

mod clock;
mod elapsed;
mod timestamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use elapsed::Elapsed;
pub use timestamp::Timestamp;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
