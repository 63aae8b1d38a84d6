use std::sync::Arc;

use goclass_core::model::{
    ClassStats, ScoreField, SessionDate, SessionRecord, Student, StudentDraft, StudentId,
};

use crate::error::ClassroomError;
use crate::roster_service::RosterService;
use crate::session_service::SessionService;

/// One visible roster row with its record for the selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomRow {
    pub student: Student,
    pub record: SessionRecord,
}

/// Everything the classroom screen shows for one date and search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomSnapshot {
    pub date: SessionDate,
    pub stats: ClassStats,
    pub rows: Vec<ClassroomRow>,
}

/// Coordinates the roster and session stores for operations that touch both.
#[derive(Clone)]
pub struct ClassroomService {
    roster: Arc<RosterService>,
    sessions: Arc<SessionService>,
}

impl ClassroomService {
    #[must_use]
    pub fn new(roster: Arc<RosterService>, sessions: Arc<SessionService>) -> Self {
        Self { roster, sessions }
    }

    #[must_use]
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    /// Add a student and give them a zero/absent record on `date`.
    ///
    /// # Errors
    ///
    /// Returns `ClassroomError::Roster` if the draft is incomplete (nothing
    /// changes) or the roster cannot be saved.
    /// Returns `ClassroomError::Session` if the initial record cannot be saved.
    pub async fn add_student(
        &self,
        draft: StudentDraft,
        date: SessionDate,
    ) -> Result<StudentId, ClassroomError> {
        let id = self.roster.add_student(draft).await?;
        self.sessions.seed_record(date, id).await?;
        Ok(id)
    }

    /// Remove a student from the roster, keeping their past records.
    ///
    /// # Errors
    ///
    /// Returns `ClassroomError::Roster` if the roster cannot be saved.
    pub async fn delete_student(&self, id: StudentId) -> Result<Option<Student>, ClassroomError> {
        Ok(self.roster.delete_student(id).await?)
    }

    /// # Errors
    ///
    /// Returns `ClassroomError::Session` if the sessions cannot be saved.
    pub async fn adjust_score(
        &self,
        date: SessionDate,
        student: StudentId,
        field: ScoreField,
        delta: i32,
    ) -> Result<SessionRecord, ClassroomError> {
        Ok(self
            .sessions
            .adjust_score(date, student, field, delta)
            .await?)
    }

    /// # Errors
    ///
    /// Returns `ClassroomError::Session` if the sessions cannot be saved.
    pub async fn toggle_attendance(
        &self,
        date: SessionDate,
        student: StudentId,
    ) -> Result<SessionRecord, ClassroomError> {
        Ok(self.sessions.toggle_attendance(date, student).await?)
    }

    pub async fn stats(&self, date: SessionDate) -> ClassStats {
        let total = self.roster.len().await;
        self.sessions.stats(date, total).await
    }

    /// Filtered roster rows for `date` plus the day's aggregates.
    ///
    /// Students without a record on `date` are shown with the default record;
    /// nothing is written.
    pub async fn snapshot(&self, date: SessionDate, query: &str) -> ClassroomSnapshot {
        let stats = self.stats(date).await;
        let day = self.sessions.day(date).await;
        let rows = self
            .roster
            .list_filtered(query)
            .await
            .into_iter()
            .map(|student| {
                let record = day.get(&student.id()).copied().unwrap_or_default();
                ClassroomRow { student, record }
            })
            .collect();
        ClassroomSnapshot { date, stats, rows }
    }
}
