use crate::model::session::{ScoreField, SessionBook, SessionDate, SessionDay};

/// Single-day aggregates shown in the summary panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassStats {
    pub total: usize,
    pub avg_rajin: u32,
    pub avg_sopan: u32,
    pub avg_disiplin: u32,
    pub present: usize,
}

impl ClassStats {
    /// Aggregate the records stored for `date`.
    ///
    /// Only students with a record on that date count towards the averages.
    /// With no records every average is 0.
    #[must_use]
    pub fn compute(roster_len: usize, book: &SessionBook, date: SessionDate) -> Self {
        match book.day(date) {
            Some(day) => Self::from_day(roster_len, day),
            None => Self {
                total: roster_len,
                ..Self::default()
            },
        }
    }

    #[must_use]
    pub fn from_day(roster_len: usize, day: &SessionDay) -> Self {
        let present = day.values().filter(|r| r.attendance.is_present()).count();
        Self {
            total: roster_len,
            avg_rajin: rounded_mean(day, ScoreField::Rajin),
            avg_sopan: rounded_mean(day, ScoreField::Sopan),
            avg_disiplin: rounded_mean(day, ScoreField::Disiplin),
            present,
        }
    }

    #[must_use]
    pub fn average(&self, field: ScoreField) -> u32 {
        match field {
            ScoreField::Rajin => self.avg_rajin,
            ScoreField::Sopan => self.avg_sopan,
            ScoreField::Disiplin => self.avg_disiplin,
        }
    }
}

// Halves round up, matching the web build this data comes from.
fn rounded_mean(day: &SessionDay, field: ScoreField) -> u32 {
    let count = u64::try_from(day.len().max(1)).unwrap_or(u64::MAX);
    let sum: u64 = day.values().map(|r| u64::from(r.score(field))).sum();
    let mean = (2 * sum + count) / (2 * count);
    u32::try_from(mean).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::StudentId;
    use crate::model::session::{Attendance, SessionRecord};

    fn date() -> SessionDate {
        "2026-01-01".parse().unwrap()
    }

    #[test]
    fn empty_session_yields_zeroes() {
        let stats = ClassStats::compute(1, &SessionBook::new(), date());
        assert_eq!(
            stats,
            ClassStats {
                total: 1,
                avg_rajin: 0,
                avg_sopan: 0,
                avg_disiplin: 0,
                present: 0,
            }
        );
    }

    #[test]
    fn averages_cover_only_recorded_students() {
        let mut book = SessionBook::new();
        book.put(date(), StudentId::new(1), SessionRecord::new(85, 90, 88, Attendance::Present));
        book.put(date(), StudentId::new(2), SessionRecord::new(70, 75, 80, Attendance::Present));
        book.put(date(), StudentId::new(3), SessionRecord::new(95, 98, 92, Attendance::Absent));

        let stats = ClassStats::compute(5, &book, date());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.avg_rajin, 83); // 250 / 3 = 83.33
        assert_eq!(stats.avg_sopan, 88); // 263 / 3 = 87.67
        assert_eq!(stats.avg_disiplin, 87); // 260 / 3 = 86.67
        assert_eq!(stats.present, 2);
    }

    #[test]
    fn half_rounds_up() {
        let mut book = SessionBook::new();
        book.put(date(), StudentId::new(1), SessionRecord::new(5, 0, 0, Attendance::Absent));
        book.put(date(), StudentId::new(2), SessionRecord::new(0, 0, 0, Attendance::Absent));
        let stats = ClassStats::compute(2, &book, date());
        assert_eq!(stats.avg_rajin, 3);
        assert_eq!(stats.average(ScoreField::Rajin), 3);
    }

    #[test]
    fn other_dates_do_not_leak_in() {
        let mut book = SessionBook::new();
        let other: SessionDate = "2025-12-31".parse().unwrap();
        book.put(other, StudentId::new(1), SessionRecord::new(50, 50, 50, Attendance::Present));
        let stats = ClassStats::compute(1, &book, date());
        assert_eq!(stats.present, 0);
        assert_eq!(stats.avg_rajin, 0);
    }
}
