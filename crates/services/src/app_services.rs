use std::sync::Arc;

use goclass_core::model::SessionDate;
use goclass_core::seed;
use storage::repository::Storage;

use crate::Clock;
use crate::classroom_service::ClassroomService;
use crate::error::AppServicesError;
use crate::roster_service::RosterService;
use crate::session_service::SessionService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    roster: Arc<RosterService>,
    sessions: Arc<SessionService>,
    classroom: Arc<ClassroomService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or loading either
    /// store fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock).await
    }

    /// Load both stores from `storage`, falling back to seed data per store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if a store cannot be read or its seed
    /// cannot be written.
    pub async fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let roster = Arc::new(RosterService::load(clock, Arc::clone(&storage.roster)).await?);
        let sessions =
            Arc::new(SessionService::load(Arc::clone(&storage.sessions), clock.today()).await?);
        let classroom = Arc::new(ClassroomService::new(
            Arc::clone(&roster),
            Arc::clone(&sessions),
        ));

        Ok(Self {
            clock,
            roster,
            sessions,
            classroom,
        })
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn today(&self) -> SessionDate {
        self.clock.today()
    }

    #[must_use]
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn classroom(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classroom)
    }

    /// Overwrite both stores with the seed data, using `today` for the seed
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if either store cannot be saved.
    pub async fn reset_to_seed(&self, today: SessionDate) -> Result<(), AppServicesError> {
        self.roster.replace(seed::default_roster()).await?;
        self.sessions.replace(seed::default_sessions(today)).await?;
        tracing::info!(%today, "reset roster and sessions to seed data");
        Ok(())
    }
}
