//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while loading the puzzle manifest.
///
/// All of them are fatal to starting a session.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or does not match the expected shape.
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A puzzle violates a structural invariant.
    #[error("invalid puzzle #{index}: {reason}")]
    InvalidPuzzle { index: usize, reason: String },
}
