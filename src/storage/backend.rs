//! Key-value backends
//!
//! The store only needs string keys mapped to serialized text, the same
//! contract as browser local storage. Native builds persist to a directory
//! of JSON files; tests and throwaway sessions keep everything in memory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::StorageResult;

/// String-keyed storage of serialized values
pub trait StorageBackend {
    /// Read the value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key` if present
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// In-memory backend
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: pre-populate a key (e.g. to simulate hand-edited storage)
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// File backend: one `<key>.json` file per key under a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `data_dir`, creating the directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        tracing::debug!("File backend at {:?}", data_dir);
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `key`
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
