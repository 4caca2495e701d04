// Cache storage backends.
// Raw key-value persistence of JSON text, on disk or in memory.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{FolioError, Result};

use super::paths;

/// Key-value persistence for cache entries.
///
/// Implementations store opaque text; interpretation and expiry live in
/// [`TtlCache`](super::TtlCache). Errors are reserved for storage failures,
/// a missing key is `Ok(None)`.
pub trait CacheStore: Send + Sync {
    /// Read the raw text stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace whatever is stored under `key`.
    fn write(&self, key: &str, contents: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store that keeps one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the per-user cache directory.
    pub fn in_user_cache() -> Result<Self> {
        paths::cache_dir()
            .map(Self::new)
            .ok_or_else(|| FolioError::Config("no home directory for cache".to_string()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CacheStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = paths::entry_path(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = paths::entry_path(&self.dir, key);

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = paths::entry_path(&self.dir, key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Process-local store, used by tests and when persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| FolioError::Other("memory store lock poisoned".to_string()))
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested"));

        store.write("github_stats_cache", "{\"a\":1}").unwrap();

        let read = store.read("github_stats_cache").unwrap();
        assert_eq!(read.as_deref(), Some("{\"a\":1}"));
        assert!(!temp_dir.path().join("nested/github_stats_cache.tmp").exists());
    }

    #[test]
    fn test_file_store_overwrite_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));

        store.remove("k").unwrap();
        assert!(store.read("k").unwrap().is_none());

        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_file_store_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.read("missing").unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();

        assert!(store.read("k").unwrap().is_none());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.read("k").unwrap().is_none());
    }
}
