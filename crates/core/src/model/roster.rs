use chrono::{DateTime, Utc};

use crate::model::ids::StudentId;
use crate::model::student::{Student, StudentDraft, StudentError};

/// Ordered collection of students, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from persisted students.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::DuplicateId` if two entries share an id.
    pub fn from_students(students: Vec<Student>) -> Result<Self, StudentError> {
        let mut roster = Self::new();
        for student in students {
            roster.push(student)?;
        }
        Ok(roster)
    }

    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Pick an id for a student created at `now`.
    ///
    /// Ids come from the creation timestamp in milliseconds. When that would
    /// not be strictly greater than every existing id, the next free value is
    /// used instead.
    #[must_use]
    pub fn next_id(&self, now: DateTime<Utc>) -> StudentId {
        let stamp = StudentId::new(u64::try_from(now.timestamp_millis()).unwrap_or(0));
        match self.students.iter().map(Student::id).max() {
            Some(max) if max >= stamp => max.next(),
            _ => stamp,
        }
    }

    /// Validate a draft, assign it a fresh id and append it.
    ///
    /// # Errors
    ///
    /// Returns `StudentError` if the draft is missing a name or class. The
    /// roster is left untouched in that case.
    pub fn add(&mut self, draft: StudentDraft, now: DateTime<Utc>) -> Result<StudentId, StudentError> {
        let id = self.next_id(now);
        let student = draft.validate(id)?;
        self.push(student)?;
        Ok(id)
    }

    /// Append an already-built student.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::DuplicateId` if the id is already taken.
    pub fn push(&mut self, student: Student) -> Result<(), StudentError> {
        if self.get(student.id()).is_some() {
            return Err(StudentError::DuplicateId(student.id()));
        }
        self.students.push(student);
        Ok(())
    }

    /// Remove a student. Returns the removed entry, or `None` if unknown.
    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let idx = self.students.iter().position(|s| s.id() == id)?;
        Some(self.students.remove(idx))
    }

    /// Students whose name or class contains `query`, ignoring case.
    ///
    /// An empty query returns the whole roster. Order is never changed.
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.students.iter().collect();
        }
        self.students
            .iter()
            .filter(|s| s.matches_lowercase(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn sample() -> Roster {
        Roster::from_students(vec![
            Student::from_persisted(StudentId::new(1), "Aditya Pratama".into(), "XII-RPL-1".into()),
            Student::from_persisted(StudentId::new(2), "Budi Santoso".into(), "XI-TKJ-2".into()),
            Student::from_persisted(StudentId::new(3), "Citra Lestari".into(), "XII-RPL-1".into()),
        ])
        .unwrap()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let roster = sample();
        let ids: Vec<_> = roster.filtered("").iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filter_matches_name_or_class_ignoring_case() {
        let roster = sample();
        let by_class: Vec<_> = roster.filtered("rpl").iter().map(|s| s.id().value()).collect();
        assert_eq!(by_class, vec![1, 3]);

        let by_name: Vec<_> = roster.filtered("BUDI").iter().map(|s| s.id().value()).collect();
        assert_eq!(by_name, vec![2]);

        assert!(roster.filtered("zzz").is_empty());
    }

    #[test]
    fn filter_result_is_exactly_the_matching_set() {
        let roster = sample();
        let query = "tkj";
        let hits = roster.filtered(query);
        for student in roster.students() {
            let expected = student.name().to_lowercase().contains(query)
                || student.class().to_lowercase().contains(query);
            assert_eq!(hits.iter().any(|s| s.id() == student.id()), expected);
        }
    }

    #[test]
    fn add_uses_timestamp_millis_for_ids() {
        let mut roster = Roster::new();
        let now = fixed_now();
        let id = roster.add(StudentDraft::new("A", "X"), now).unwrap();
        assert_eq!(id.value(), 1_700_000_000_000);
    }

    #[test]
    fn add_twice_in_the_same_millisecond_stays_unique() {
        let mut roster = Roster::new();
        let now = fixed_now();
        let first = roster.add(StudentDraft::new("A", "X"), now).unwrap();
        let second = roster.add(StudentDraft::new("B", "Y"), now).unwrap();
        assert!(second > first);

        let earlier = roster
            .add(StudentDraft::new("C", "Z"), now - Duration::days(1))
            .unwrap();
        assert!(earlier > second);
    }

    #[test]
    fn rejected_draft_leaves_roster_untouched() {
        let mut roster = sample();
        let err = roster.add(StudentDraft::new("", "X"), fixed_now()).unwrap_err();
        assert_eq!(err, StudentError::EmptyName);
        assert_eq!(roster, sample());
    }

    #[test]
    fn from_students_rejects_duplicates() {
        let dup = Student::from_persisted(StudentId::new(1), "A".into(), "X".into());
        let err = Roster::from_students(vec![dup.clone(), dup]).unwrap_err();
        assert_eq!(err, StudentError::DuplicateId(StudentId::new(1)));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut roster = sample();
        assert!(roster.remove(StudentId::new(99)).is_none());
        assert_eq!(roster.len(), 3);

        let removed = roster.remove(StudentId::new(2)).unwrap();
        assert_eq!(removed.name(), "Budi Santoso");
        let ids: Vec<_> = roster.students().iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
