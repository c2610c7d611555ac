//! # Slateport Store
//!
//! Persistent key-value state storage for the Slateport client.
//!
//! This crate provides:
//! - The [`KeyValueStore`] trait that session state is persisted through
//! - [`MemoryStore`]: a non-persistent store for tests and ephemeral
//!   sessions
//! - [`FileStore`]: a JSON-file-backed store for retaining sessions
//!   across restarts
//! - The well-known key names under [`keys`]
//!
//! # Example
//!
//! ```ignore
//! use slateport_store::{FileStore, KeyValueStore, keys};
//!
//! let store = FileStore::open("/tmp/slateport/state.json")?;
//! store.set(keys::TOKEN, "abc123")?;
//! assert_eq!(store.get(keys::TOKEN)?, Some("abc123".to_string()));
//! store.remove(keys::TOKEN)?;
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by [`KeyValueStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage for client session state.
///
/// Implementations must tolerate concurrent access from multiple
/// handles; all methods take `&self`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
