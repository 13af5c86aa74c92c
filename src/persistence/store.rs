use super::files::{atomic_write, ensure_dir, read_file};
use crate::domain::{AppSettings, DailyStat, Task};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// One independently stored JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Settings,
    Tasks,
    Stats,
}

impl StorageKey {
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageKey::Settings => "settings.json",
            StorageKey::Tasks => "tasks.json",
            StorageKey::Stats => "stats.json",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode {}: {source}", .key.file_name())]
    Encode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .key.file_name())]
    Write {
        key: StorageKey,
        #[source]
        source: io::Error,
    },
}

/// Everything that survives a restart
#[derive(Debug, Clone, Default)]
pub struct PersistedState {
    pub settings: AppSettings,
    pub tasks: Vec<Task>,
    pub stats: Vec<DailyStat>,
}

/// JSON documents in the data directory, one file per key
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Load a document, falling back to the default when it is missing or unreadable
    pub fn load<T: DeserializeOwned + Default>(&self, key: StorageKey) -> T {
        let path = self.path(key);
        let content = match read_file(&path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(file = key.file_name(), "no stored state, using defaults");
                return T::default();
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "could not read stored state, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                warn!(file = %path.display(), error = %err, "malformed stored state, using defaults");
                T::default()
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode { key, source })?;
        atomic_write(self.path(key), &json).map_err(|source| StoreError::Write { key, source })?;
        debug!(file = key.file_name(), "saved");
        Ok(())
    }

    pub fn load_state(&self) -> PersistedState {
        PersistedState {
            settings: self.load::<AppSettings>(StorageKey::Settings).sanitized(),
            tasks: self.load(StorageKey::Tasks),
            stats: self.load(StorageKey::Stats),
        }
    }
}
