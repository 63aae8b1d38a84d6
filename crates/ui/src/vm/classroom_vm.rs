use goclass_core::model::{ScoreField, SessionDate, SessionRecord, StudentId};
use services::{ClassroomRow, ClassroomSnapshot};

use crate::vm::date_fmt::format_session_date;

/// Everything a user can do on the classroom screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassroomIntent {
    Search(String),
    SelectDate(SessionDate),
    AdjustScore {
        student: StudentId,
        field: ScoreField,
        delta: i32,
    },
    ToggleAttendance(StudentId),
    OpenAddDialog,
    EditDraftName(String),
    EditDraftClass(String),
    SubmitDraft,
    CloseAddDialog,
    RequestDelete(StudentId),
    ConfirmDelete,
    CancelDelete,
    DismissError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBadgeVm {
    pub field: ScoreField,
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: StudentId,
    pub name: String,
    pub class: String,
    pub scores: [ScoreBadgeVm; 3],
    pub present: bool,
}

impl StudentRowVm {
    #[must_use]
    pub fn attendance_mark(&self) -> &'static str {
        if self.present { "✓" } else { "✕" }
    }

    #[must_use]
    pub fn attendance_label(&self) -> &'static str {
        if self.present { "Present" } else { "Absent" }
    }
}

impl From<&ClassroomRow> for StudentRowVm {
    fn from(row: &ClassroomRow) -> Self {
        Self {
            id: row.student.id(),
            name: row.student.name().to_owned(),
            class: row.student.class().to_owned(),
            scores: score_badges(row.record),
            present: row.record.attendance.is_present(),
        }
    }
}

fn score_badges(record: SessionRecord) -> [ScoreBadgeVm; 3] {
    ScoreField::ALL.map(|field| ScoreBadgeVm {
        field,
        label: field.label(),
        value: record.score(field),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassroomVm {
    pub date: SessionDate,
    pub date_label: String,
    pub stat_cards: Vec<StatCardVm>,
    pub attendance: String,
    pub rows: Vec<StudentRowVm>,
}

impl From<&ClassroomSnapshot> for ClassroomVm {
    fn from(snapshot: &ClassroomSnapshot) -> Self {
        let stats = snapshot.stats;
        let mut stat_cards = vec![StatCardVm {
            label: "Total Students",
            value: stats.total.to_string(),
        }];
        stat_cards.extend(ScoreField::ALL.map(|field| StatCardVm {
            label: avg_label(field),
            value: format!("{}%", stats.average(field)),
        }));

        Self {
            date: snapshot.date,
            date_label: format_session_date(snapshot.date),
            stat_cards,
            attendance: format!("{} / {}", stats.present, stats.total),
            rows: snapshot.rows.iter().map(StudentRowVm::from).collect(),
        }
    }
}

const fn avg_label(field: ScoreField) -> &'static str {
    match field {
        ScoreField::Rajin => "Avg. Rajin",
        ScoreField::Sopan => "Avg. Sopan",
        ScoreField::Disiplin => "Avg. Disiplin",
    }
}

#[must_use]
pub fn map_classroom(snapshot: &ClassroomSnapshot) -> ClassroomVm {
    ClassroomVm::from(snapshot)
}
