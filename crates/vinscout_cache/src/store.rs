//! Persistence backends for the lookup history.
//!
//! A store only moves an opaque blob in and out; it knows nothing about the
//! records inside.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::StoreError;

/// Fixed key under which the history blob is stored.
pub const HISTORY_KEY: &str = "VINLookupHistory";

/// Byte-level load/save of the serialized history.
pub trait HistoryStore {
    /// Returns the stored blob, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored blob.
    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Stores the history as `VINLookupHistory.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the history file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{HISTORY_KEY}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path();
        if !path.exists() {
            debug!("No history file found at {}", path.display());
            return Ok(None);
        }
        Ok(Some(fs::read(&path)?))
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path();
        fs::write(&path, bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// In-memory store, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes`.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            saves: 0,
        }
    }

    /// The currently stored blob.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.bytes.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        self.bytes = Some(bytes.to_vec());
        self.saves += 1;
        Ok(())
    }
}
