use std::sync::Arc;

use goclass_core::model::{Roster, Student, StudentDraft, StudentId};
use goclass_core::seed;
use storage::repository::{RosterRepository, StorageError};
use tokio::sync::Mutex;

use crate::Clock;
use crate::error::RosterServiceError;

/// Owns the in-memory roster and mirrors every change to its repository.
pub struct RosterService {
    clock: Clock,
    repo: Arc<dyn RosterRepository>,
    roster: Mutex<Roster>,
}

impl RosterService {
    /// Wrap an already-loaded roster without touching storage.
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn RosterRepository>, roster: Roster) -> Self {
        Self {
            clock,
            repo,
            roster: Mutex::new(roster),
        }
    }

    /// Load the saved roster, installing (and saving) the seed roster when
    /// nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::Storage` if the medium cannot be read or
    /// the seed cannot be written.
    pub async fn load(
        clock: Clock,
        repo: Arc<dyn RosterRepository>,
    ) -> Result<Self, RosterServiceError> {
        let roster = match repo.load_roster().await {
            Ok(Some(roster)) => roster,
            Ok(None) => {
                tracing::info!("no saved roster, installing seed roster");
                install_seed(repo.as_ref()).await?
            }
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "saved roster is malformed, installing seed roster");
                install_seed(repo.as_ref()).await?
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self::new(clock, repo, roster))
    }

    /// All students in insertion order.
    pub async fn list(&self) -> Vec<Student> {
        self.roster.lock().await.students().to_vec()
    }

    /// Students whose name or class contains `query`, ignoring case.
    pub async fn list_filtered(&self, query: &str) -> Vec<Student> {
        self.roster
            .lock()
            .await
            .filtered(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.roster.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.roster.lock().await.is_empty()
    }

    /// Validate and append a new student, then persist the roster.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::Student` if name or class is empty; the
    /// roster is unchanged and nothing is written.
    /// Returns `RosterServiceError::Storage` if persistence fails; the student
    /// is dropped from the in-memory roster again.
    pub async fn add_student(&self, draft: StudentDraft) -> Result<StudentId, RosterServiceError> {
        let mut roster = self.roster.lock().await;
        let id = roster.add(draft, self.clock.now())?;
        if let Err(err) = self.persist(&roster).await {
            roster.remove(id);
            return Err(err);
        }
        tracing::info!(student = %id, "student added");
        Ok(id)
    }

    /// Remove a student from the roster. Session records are left alone.
    ///
    /// Returns `Ok(None)` without writing when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::Storage` if persistence fails.
    pub async fn delete_student(
        &self,
        id: StudentId,
    ) -> Result<Option<Student>, RosterServiceError> {
        let mut roster = self.roster.lock().await;
        let Some(removed) = roster.remove(id) else {
            return Ok(None);
        };
        self.persist(&roster).await?;
        tracing::info!(student = %id, "student deleted");
        Ok(Some(removed))
    }

    /// Replace the whole roster and persist it.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::Storage` if persistence fails.
    pub async fn replace(&self, next: Roster) -> Result<(), RosterServiceError> {
        let mut roster = self.roster.lock().await;
        *roster = next;
        self.persist(&roster).await
    }

    async fn persist(&self, roster: &Roster) -> Result<(), RosterServiceError> {
        self.repo.save_roster(roster).await.map_err(|err| {
            tracing::error!(error = %err, "failed to persist roster");
            RosterServiceError::from(err)
        })
    }
}

async fn install_seed(repo: &dyn RosterRepository) -> Result<Roster, RosterServiceError> {
    let roster = seed::default_roster();
    repo.save_roster(&roster).await?;
    Ok(roster)
}
