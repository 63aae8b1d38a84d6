//! JSON layout of the two persisted entries.
//!
//! `roster` is an array of `{ id, name, class }`. `sessions` is an object
//! keyed by `YYYY-MM-DD`, each value an object keyed by the stringified
//! student id holding `{ rajin, sopan, disiplin, attendance }`.

use std::collections::BTreeMap;

use goclass_core::model::{
    Attendance, Roster, SessionBook, SessionDate, SessionDay, SessionRecord, Student, StudentId,
};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[derive(Debug, Serialize, Deserialize)]
struct StudentDto {
    id: u64,
    name: String,
    class: String,
}

// Missing scores read as 0, like `undefined` did in the web build.
#[derive(Debug, Serialize, Deserialize)]
struct RecordDto {
    #[serde(default)]
    rajin: u32,
    #[serde(default)]
    sopan: u32,
    #[serde(default)]
    disiplin: u32,
    #[serde(default)]
    attendance: Attendance,
}

impl From<SessionRecord> for RecordDto {
    fn from(record: SessionRecord) -> Self {
        Self {
            rajin: record.rajin,
            sopan: record.sopan,
            disiplin: record.disiplin,
            attendance: record.attendance,
        }
    }
}

impl From<RecordDto> for SessionRecord {
    fn from(dto: RecordDto) -> Self {
        SessionRecord::new(dto.rajin, dto.sopan, dto.disiplin, dto.attendance)
    }
}

/// Serialize the roster in insertion order.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_roster(roster: &Roster) -> Result<String, StorageError> {
    let dtos: Vec<StudentDto> = roster
        .students()
        .iter()
        .map(|s| StudentDto {
            id: s.id().value(),
            name: s.name().to_owned(),
            class: s.class().to_owned(),
        })
        .collect();
    serde_json::to_string(&dtos).map_err(ser)
}

/// Parse a stored roster.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or duplicate ids.
pub fn decode_roster(raw: &str) -> Result<Roster, StorageError> {
    let dtos: Vec<StudentDto> = serde_json::from_str(raw).map_err(ser)?;
    let students = dtos
        .into_iter()
        .map(|dto| Student::from_persisted(StudentId::new(dto.id), dto.name, dto.class))
        .collect();
    Roster::from_students(students).map_err(ser)
}

/// Serialize every session.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_sessions(book: &SessionBook) -> Result<String, StorageError> {
    let days: BTreeMap<String, BTreeMap<String, RecordDto>> = book
        .days()
        .iter()
        .map(|(date, day)| {
            let records = day
                .iter()
                .map(|(id, record)| (id.to_string(), RecordDto::from(*record)))
                .collect();
            (date.to_string(), records)
        })
        .collect();
    serde_json::to_string(&days).map_err(ser)
}

/// Parse stored sessions.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, dates or ids.
pub fn decode_sessions(raw: &str) -> Result<SessionBook, StorageError> {
    let parsed: BTreeMap<String, BTreeMap<String, RecordDto>> =
        serde_json::from_str(raw).map_err(ser)?;

    let mut days = BTreeMap::new();
    for (date_key, records) in parsed {
        let date: SessionDate = date_key.parse().map_err(ser)?;
        let mut day = SessionDay::new();
        for (id_key, dto) in records {
            let id: StudentId = id_key.parse().map_err(ser)?;
            day.insert(id, SessionRecord::from(dto));
        }
        days.insert(date, day);
    }
    Ok(SessionBook::from_days(days))
}
