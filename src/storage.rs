//! Persistence adapter for the combined register state.
//!
//! The core is agnostic to the backing medium: it sees a [`StateStore`]
//! that loads and saves the `{counters, letters}` snapshot. The default
//! implementation keeps one JSON document on disk, written atomically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::RegisterState;
use crate::error::{Effect, Transience};
use crate::paths;

/// Underlying storage read/write failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode register state: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn transience(&self) -> Transience {
        match self {
            StorageError::Read { .. } | StorageError::Write { .. } => Transience::Retryable,
            StorageError::Encode { .. } => Transience::Permanent,
        }
    }

    pub fn effect(&self) -> Effect {
        match self {
            // Atomic rename means a failed write leaves the previous
            // file intact, but the in-memory mutation that triggered
            // the save may already have happened.
            StorageError::Write { .. } => Effect::Unknown,
            StorageError::Read { .. } | StorageError::Encode { .. } => Effect::None,
        }
    }
}

/// Load/save boundary the registration service talks to.
///
/// `load` never fails: nothing stored, or stored data that does not
/// parse, degrades to the empty default state (the degradation is
/// logged). `save` persists the full snapshot.
pub trait StateStore {
    fn load(&self) -> RegisterState;
    fn save(&mut self, state: &RegisterState) -> Result<(), StorageError>;
}

/// JSON-file-backed store. One document, rewritten whole on each save
/// via a temp file + rename so a crash never leaves a torn register.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default data location (`register.json` under the
    /// XDG data dir, `LR_DATA_DIR` override respected).
    pub fn open_default() -> Self {
        Self::new(paths::register_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> RegisterState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no register at {}, starting empty", self.path.display());
                return RegisterState::default();
            }
            Err(e) => {
                tracing::warn!("failed to read {}, starting empty: {e}", self.path.display());
                return RegisterState::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "register at {} is malformed, starting empty: {e}",
                    self.path.display()
                );
                RegisterState::default()
            }
        }
    }

    fn save(&mut self, state: &RegisterState) -> Result<(), StorageError> {
        let contents =
            serde_json::to_string_pretty(state).map_err(|e| StorageError::Encode { source: e })?;
        atomic_write(&self.path, contents.as_bytes())
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let dir = path.parent().ok_or_else(|| StorageError::Write {
        path: path.to_path_buf(),
        source: io::Error::other("path has no parent directory"),
    })?;
    fs::create_dir_all(dir).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(temp.path(), data).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    temp.persist(path).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// In-memory store for tests and embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RegisterState,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-existing state.
    pub fn with_state(state: RegisterState) -> Self {
        Self { state }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> RegisterState {
        self.state.clone()
    }

    fn save(&mut self, state: &RegisterState) -> Result<(), StorageError> {
        self.state = state.clone();
        Ok(())
    }
}
