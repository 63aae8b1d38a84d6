use async_trait::async_trait;
use goclass_core::model::{Roster, SessionBook};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::codec;

/// Key holding the serialized roster.
pub const ROSTER_KEY: &str = "roster";
/// Key holding the serialized sessions.
pub const SESSIONS_KEY: &str = "sessions";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string key-value medium the two stores are mirrored to.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the medium cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the medium cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Repository contract for the roster entry.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the saved roster. `Ok(None)` means nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the saved value is malformed,
    /// or other storage errors.
    async fn load_roster(&self) -> Result<Option<Roster>, StorageError>;

    /// Overwrite the saved roster with a full re-serialization.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the roster cannot be stored.
    async fn save_roster(&self, roster: &Roster) -> Result<(), StorageError>;
}

/// Repository contract for the sessions entry.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load saved sessions. `Ok(None)` means nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the saved value is malformed,
    /// or other storage errors.
    async fn load_sessions(&self) -> Result<Option<SessionBook>, StorageError>;

    /// Overwrite saved sessions with a full re-serialization.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the sessions cannot be stored.
    async fn save_sessions(&self, book: &SessionBook) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: LocalStore> RosterRepository for T {
    async fn load_roster(&self) -> Result<Option<Roster>, StorageError> {
        self.get(ROSTER_KEY)
            .await?
            .map(|raw| codec::decode_roster(&raw))
            .transpose()
    }

    async fn save_roster(&self, roster: &Roster) -> Result<(), StorageError> {
        let raw = codec::encode_roster(roster)?;
        self.set(ROSTER_KEY, &raw).await?;
        tracing::debug!(key = ROSTER_KEY, students = roster.len(), "persisted roster");
        Ok(())
    }
}

#[async_trait]
impl<T: LocalStore> SessionRepository for T {
    async fn load_sessions(&self) -> Result<Option<SessionBook>, StorageError> {
        self.get(SESSIONS_KEY)
            .await?
            .map(|raw| codec::decode_sessions(&raw))
            .transpose()
    }

    async fn save_sessions(&self, book: &SessionBook) -> Result<(), StorageError> {
        let raw = codec::encode_sessions(book)?;
        self.set(SESSIONS_KEY, &raw).await?;
        tracing::debug!(key = SESSIONS_KEY, dates = book.days().len(), "persisted sessions");
        Ok(())
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Pre-populate a raw value, e.g. to simulate data left by an older build.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut guard) = self.entries.lock() {
            guard.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }
}

#[async_trait]
impl LocalStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Aggregates the two repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub roster: Arc<dyn RosterRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Wire both repositories to one backing medium.
    #[must_use]
    pub fn from_repository<T: LocalStore + Clone + 'static>(repo: T) -> Self {
        let roster: Arc<dyn RosterRepository> = Arc::new(repo.clone());
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo);
        Self { roster, sessions }
    }
}
