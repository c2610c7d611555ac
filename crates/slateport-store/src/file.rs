//! JSON-file-backed store for retaining sessions across restarts.
//!
//! The whole store is one JSON object on disk:
//!
//! ```json
//! {
//!   "token": "mock-token-8f14e45f",
//!   "user": "{\"id\":\"1\",...}",
//!   "userRole": "student"
//! }
//! ```
//!
//! Writes go to a temporary file in the same directory followed by a
//! rename, so a crash mid-write never leaves a half-written state file
//! behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::{fs, io};

use tracing::warn;

use crate::{KeyValueStore, StoreError};

/// File-backed [`KeyValueStore`].
///
/// Clones share the same in-memory map and target file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts the store empty. A file that exists but no
    /// longer parses is treated as empty too; the next write replaces
    /// it. Only genuine I/O failures are returned as errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "state file is corrupt; starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    /// The file this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::keys;

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("slateport_store_{}_{}", name, std::process::id()))
            .join("state.json")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let path = scratch_path("missing");
        cleanup(&path);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);

        cleanup(&path);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = scratch_path("reopen");
        cleanup(&path);

        let store = FileStore::open(&path).unwrap();
        store.set(keys::TOKEN, "abc123").unwrap();
        store.set(keys::USER_ROLE, "teacher").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::TOKEN).unwrap().as_deref(), Some("abc123"));
        assert_eq!(
            reopened.get(keys::USER_ROLE).unwrap().as_deref(),
            Some("teacher")
        );

        cleanup(&path);
    }

    #[test]
    fn test_remove_survives_reopen() {
        let path = scratch_path("remove");
        cleanup(&path);

        let store = FileStore::open(&path).unwrap();
        store.set(keys::TOKEN, "abc123").unwrap();
        store.remove(keys::TOKEN).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::TOKEN).unwrap(), None);

        cleanup(&path);
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_recovers() {
        let path = scratch_path("corrupt");
        cleanup(&path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::USER).unwrap(), None);

        store.set(keys::USER, "{}").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::USER).unwrap().as_deref(), Some("{}"));

        cleanup(&path);
    }

    #[test]
    fn test_no_stray_temp_file_after_write() {
        let path = scratch_path("tmpfile");
        cleanup(&path);

        let store = FileStore::open(&path).unwrap();
        store.set(keys::TOKEN, "abc123").unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert!(path.exists());

        cleanup(&path);
    }
}
