use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::StudentId;

/// Step applied by the score buttons in the UI.
pub const SCORE_STEP: i32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionDateError {
    #[error("session date must be YYYY-MM-DD: {0}")]
    Invalid(String),
}

/// Calendar date that keys one session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionDate(NaiveDate);

impl SessionDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from its parts, returning `None` if it does not exist.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionDate({})", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Display for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for SessionDate {
    type Err = SessionDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| SessionDateError::Invalid(s.to_owned()))
    }
}

/// One of the three behaviour scores tracked per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreField {
    Rajin,
    Sopan,
    Disiplin,
}

impl ScoreField {
    pub const ALL: [ScoreField; 3] = [ScoreField::Rajin, ScoreField::Sopan, ScoreField::Disiplin];

    /// Stable key used in persisted records.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ScoreField::Rajin => "rajin",
            ScoreField::Sopan => "sopan",
            ScoreField::Disiplin => "disiplin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScoreField::Rajin => "Rajin",
            ScoreField::Sopan => "Sopan",
            ScoreField::Disiplin => "Disiplin",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Present,
    #[default]
    Absent,
}

impl Attendance {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Attendance::Present => Attendance::Absent,
            Attendance::Absent => Attendance::Present,
        }
    }

    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Attendance::Present)
    }
}

/// Scores and attendance for one student on one date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionRecord {
    pub rajin: u32,
    pub sopan: u32,
    pub disiplin: u32,
    pub attendance: Attendance,
}

impl SessionRecord {
    #[must_use]
    pub const fn new(rajin: u32, sopan: u32, disiplin: u32, attendance: Attendance) -> Self {
        Self {
            rajin,
            sopan,
            disiplin,
            attendance,
        }
    }

    #[must_use]
    pub const fn score(&self, field: ScoreField) -> u32 {
        match field {
            ScoreField::Rajin => self.rajin,
            ScoreField::Sopan => self.sopan,
            ScoreField::Disiplin => self.disiplin,
        }
    }

    /// Copy of this record with `delta` applied to one score, clamped to `0..=u32::MAX`.
    #[must_use]
    pub fn with_adjusted(self, field: ScoreField, delta: i32) -> Self {
        let raw = i64::from(self.score(field)) + i64::from(delta);
        let value = u32::try_from(raw.max(0)).unwrap_or(u32::MAX);
        let mut next = self;
        match field {
            ScoreField::Rajin => next.rajin = value,
            ScoreField::Sopan => next.sopan = value,
            ScoreField::Disiplin => next.disiplin = value,
        }
        next
    }

    #[must_use]
    pub const fn with_attendance_toggled(self) -> Self {
        Self {
            attendance: self.attendance.toggled(),
            ..self
        }
    }
}

/// Records for every student on one date.
pub type SessionDay = BTreeMap<StudentId, SessionRecord>;

/// Every session, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionBook {
    days: BTreeMap<SessionDate, SessionDay>,
}

impl SessionBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_days(days: BTreeMap<SessionDate, SessionDay>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn days(&self) -> &BTreeMap<SessionDate, SessionDay> {
        &self.days
    }

    /// Records stored for `date`, if that session exists.
    #[must_use]
    pub fn day(&self, date: SessionDate) -> Option<&SessionDay> {
        self.days.get(&date)
    }

    /// Stored record, or the zero/absent default. Never mutates the book.
    #[must_use]
    pub fn record_or_default(&self, date: SessionDate, student: StudentId) -> SessionRecord {
        self.days
            .get(&date)
            .and_then(|day| day.get(&student))
            .copied()
            .unwrap_or_default()
    }

    /// Replace the whole record for (`date`, `student`), creating the session lazily.
    pub fn put(&mut self, date: SessionDate, student: StudentId, record: SessionRecord) {
        self.days.entry(date).or_default().insert(student, record);
    }

    /// Write a fresh default record, overwriting any stored one.
    pub fn seed_record(&mut self, date: SessionDate, student: StudentId) -> SessionRecord {
        let record = SessionRecord::default();
        self.put(date, student, record);
        record
    }

    pub fn adjust_score(
        &mut self,
        date: SessionDate,
        student: StudentId,
        field: ScoreField,
        delta: i32,
    ) -> SessionRecord {
        let record = self.record_or_default(date, student).with_adjusted(field, delta);
        self.put(date, student, record);
        record
    }

    pub fn toggle_attendance(&mut self, date: SessionDate, student: StudentId) -> SessionRecord {
        let record = self
            .record_or_default(date, student)
            .with_attendance_toggled();
        self.put(date, student, record);
        record
    }
}
