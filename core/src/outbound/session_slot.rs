//! Session slot adapters.
//!
//! The persisted slot is a single location holding one serialised profile;
//! its absence means "no session". The file-backed adapter is the durable
//! one; the in-memory adapter serves tests and ephemeral runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::user::UserProfile;

/// Session slot stored as one JSON file on disk.
///
/// The browser build of this flow keeps the profile under a single local
/// storage key; this adapter is the filesystem equivalent, one file holding
/// one JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Creates a store over `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<UserProfile>, SessionStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::io(err.to_string())),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|err| SessionStoreError::corrupt(err.to_string()))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), SessionStoreError> {
        let json = serde_json::to_string(profile)
            .map_err(|err| SessionStoreError::corrupt(err.to_string()))?;
        std::fs::write(&self.path, json).map_err(|err| SessionStoreError::io(err.to_string()))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::io(err.to_string())),
        }
    }
}

/// Session slot held in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<UserProfile>>,
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<UserProfile>, SessionStoreError> {
        self.slot
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| SessionStoreError::io("session slot lock poisoned"))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), SessionStoreError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| SessionStoreError::io("session slot lock poisoned"))?;
        *guard = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| SessionStoreError::io("session slot lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
