//! Error types for the session controller.

use thiserror::Error;
use varkamp_storage::StorageError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors returned by [`crate::Session`] operations.
///
/// Wrong answers are not errors; they come back as a rejected
/// [`crate::SubmitOutcome`]. The variants here are contract violations by
/// the caller or persistence failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `start()` called on a session that has already started.
    #[error("session already started")]
    AlreadyStarted,

    /// A puzzle operation before `start()`.
    #[error("session not started")]
    NotStarted,

    /// A puzzle operation after the last puzzle was solved.
    #[error("all puzzles are solved")]
    SessionComplete,

    /// Static pages are locked until the session starts.
    #[error("page {0:?} is locked until the session starts")]
    NavigationLocked(String),

    /// The manifest has no static page with this key.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Reading or writing the persisted record failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
