//! Session file storage
//!
//! The whole session store lives in one JSON file:
//! ```text
//! {
//!   "1": [[3, "2024-06-12"], [0, "2024-06-15"], [1, "2024-06-14"]],
//!   ...
//! }
//! ```
//! An unreadable file is never fatal: the run starts from an empty store.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::SessionStore;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Storage manager for the session file
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session store, falling back to an empty one
    pub fn load(&self) -> SessionStore {
        if !self.path.exists() {
            log::info!("No session file at {:?}, starting fresh", self.path);
            return SessionStore::new();
        }

        match self.try_load() {
            Ok(store) => {
                log::info!("Loaded {} card records from {:?}", store.len(), self.path);
                store
            }
            Err(e) => {
                log::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                SessionStore::new()
            }
        }
    }

    fn try_load(&self) -> Result<SessionStore> {
        let content = fs::read_to_string(&self.path)?;
        let store: SessionStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    /// Write the whole store
    pub fn save(&self, store: &SessionStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content)?;
        log::info!("Saved {} card records to {:?}", store.len(), self.path);
        Ok(())
    }
}
