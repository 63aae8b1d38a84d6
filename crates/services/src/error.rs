//! Shared error types for the services crate.

use thiserror::Error;

use goclass_core::model::StudentError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `RosterService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterServiceError {
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RosterServiceError {
    /// True when the draft was rejected before anything changed.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Student(_))
    }
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ClassroomService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassroomError {
    #[error(transparent)]
    Roster(#[from] RosterServiceError),
    #[error(transparent)]
    Session(#[from] SessionServiceError),
}

impl ClassroomError {
    /// True when a student draft was rejected for a missing field.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Roster(err) if err.is_validation())
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Roster(#[from] RosterServiceError),
    #[error(transparent)]
    Session(#[from] SessionServiceError),
}
