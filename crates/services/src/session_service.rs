use std::sync::Arc;

use goclass_core::model::{
    ClassStats, ScoreField, SessionBook, SessionDate, SessionDay, SessionRecord, StudentId,
};
use goclass_core::seed;
use storage::repository::{SessionRepository, StorageError};
use tokio::sync::Mutex;

use crate::error::SessionServiceError;

/// Owns the in-memory session book and mirrors every change to its repository.
///
/// Each mutation is a read-modify-write of one whole record and is persisted
/// before the call returns.
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
    book: Mutex<SessionBook>,
}

impl SessionService {
    /// Wrap an already-loaded book without touching storage.
    #[must_use]
    pub fn new(repo: Arc<dyn SessionRepository>, book: SessionBook) -> Self {
        Self {
            repo,
            book: Mutex::new(book),
        }
    }

    /// Load saved sessions, installing (and saving) the seed session for
    /// `today` when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the medium cannot be read or
    /// the seed cannot be written.
    pub async fn load(
        repo: Arc<dyn SessionRepository>,
        today: SessionDate,
    ) -> Result<Self, SessionServiceError> {
        let book = match repo.load_sessions().await {
            Ok(Some(book)) => book,
            Ok(None) => {
                tracing::info!(%today, "no saved sessions, installing seed session");
                install_seed(repo.as_ref(), today).await?
            }
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "saved sessions are malformed, installing seed session");
                install_seed(repo.as_ref(), today).await?
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self::new(repo, book))
    }

    /// Stored record for (`date`, `student`), or the zero/absent default.
    pub async fn record(&self, date: SessionDate, student: StudentId) -> SessionRecord {
        self.book.lock().await.record_or_default(date, student)
    }

    /// Copy of every record on `date`; empty when the session does not exist.
    pub async fn day(&self, date: SessionDate) -> SessionDay {
        self.book.lock().await.day(date).cloned().unwrap_or_default()
    }

    /// Copy of the whole book.
    pub async fn snapshot(&self) -> SessionBook {
        self.book.lock().await.clone()
    }

    /// Aggregates for `date` given the current roster size.
    pub async fn stats(&self, date: SessionDate, roster_len: usize) -> ClassStats {
        let book = self.book.lock().await;
        ClassStats::compute(roster_len, &book, date)
    }

    /// Add `delta` to one score, clamping at zero.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if persistence fails.
    pub async fn adjust_score(
        &self,
        date: SessionDate,
        student: StudentId,
        field: ScoreField,
        delta: i32,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(|book| book.adjust_score(date, student, field, delta))
            .await
    }

    /// Flip present/absent. A missing record starts absent.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if persistence fails.
    pub async fn toggle_attendance(
        &self,
        date: SessionDate,
        student: StudentId,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(|book| book.toggle_attendance(date, student))
            .await
    }

    /// Write a zero/absent record for a newly added student.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if persistence fails.
    pub async fn seed_record(
        &self,
        date: SessionDate,
        student: StudentId,
    ) -> Result<SessionRecord, SessionServiceError> {
        self.mutate(|book| book.seed_record(date, student)).await
    }

    /// Replace the whole book and persist it.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if persistence fails.
    pub async fn replace(&self, next: SessionBook) -> Result<(), SessionServiceError> {
        self.mutate(|book| *book = next).await
    }

    async fn mutate<R>(
        &self,
        apply: impl FnOnce(&mut SessionBook) -> R,
    ) -> Result<R, SessionServiceError> {
        let mut book = self.book.lock().await;
        let out = apply(&mut book);
        if let Err(err) = self.repo.save_sessions(&book).await {
            tracing::error!(error = %err, "failed to persist sessions");
            return Err(err.into());
        }
        Ok(out)
    }
}

async fn install_seed(
    repo: &dyn SessionRepository,
    today: SessionDate,
) -> Result<SessionBook, SessionServiceError> {
    let book = seed::default_sessions(today);
    repo.save_sessions(&book).await?;
    Ok(book)
}
