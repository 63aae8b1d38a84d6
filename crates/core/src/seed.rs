//! Built-in sample data installed when nothing usable has been saved yet.

use crate::model::{
    Attendance, Roster, SessionBook, SessionDate, SessionRecord, Student, StudentId,
};

const SEED_STUDENTS: [(u64, &str, &str); 5] = [
    (1, "Aditya Pratama", "XII-RPL-1"),
    (2, "Budi Santoso", "XI-TKJ-2"),
    (3, "Citra Lestari", "XII-RPL-1"),
    (4, "Dewi Anggraeni", "X-MM-3"),
    (5, "Eko Wahyudi", "XI-TKJ-2"),
];

const SEED_RECORDS: [(u64, SessionRecord); 3] = [
    (1, SessionRecord::new(85, 90, 88, Attendance::Present)),
    (2, SessionRecord::new(70, 75, 80, Attendance::Present)),
    (3, SessionRecord::new(95, 98, 92, Attendance::Absent)),
];

/// Sample roster of five students with ids 1..=5.
#[must_use]
pub fn default_roster() -> Roster {
    let students = SEED_STUDENTS
        .iter()
        .map(|&(id, name, class)| {
            Student::from_persisted(StudentId::new(id), name.to_owned(), class.to_owned())
        })
        .collect();
    // Seed ids are distinct constants, so this never falls back.
    Roster::from_students(students).unwrap_or_default()
}

/// One sample session dated `today` with partial scores for the first three students.
#[must_use]
pub fn default_sessions(today: SessionDate) -> SessionBook {
    let mut book = SessionBook::new();
    for (id, record) in SEED_RECORDS {
        book.put(today, StudentId::new(id), record);
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassStats;

    #[test]
    fn roster_seed_is_stable() {
        let roster = default_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.students()[0].name(), "Aditya Pratama");
        assert_eq!(roster.students()[4].class(), "XI-TKJ-2");
    }

    #[test]
    fn session_seed_only_covers_today() {
        let today: SessionDate = "2026-01-20".parse().unwrap();
        let book = default_sessions(today);
        assert_eq!(book.days().len(), 1);
        let day = book.day(today).unwrap();
        assert_eq!(day.len(), 3);
        assert!(day.get(&StudentId::new(4)).is_none());

        let stats = ClassStats::compute(default_roster().len(), &book, today);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.total, 5);
    }
}
