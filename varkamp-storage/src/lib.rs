//! Key-value persistence for VÅRKAMP sessions.
//!
//! The session controller persists a handful of string entries. This crate
//! provides the seam it writes through and two implementations:
//!
//! - [`MemoryStore`]: a map that lives as long as the process (tests, demos)
//! - [`FileStore`]: a JSON object on disk, rewritten atomically on each change
//!
//! Values are plain strings; interpreting them is the caller's business.

mod error;
mod file;
mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-to-string store.
pub trait KeyValueStore {
    /// Returns the value for `key`, if present.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Inserts or replaces the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;

    /// Removes every entry.
    fn clear(&mut self) -> StorageResult<()>;
}
