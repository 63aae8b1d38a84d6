mod ids;
mod roster;
mod session;
mod stats;
mod student;

pub use ids::{ParseIdError, StudentId};
pub use roster::Roster;
pub use session::{
    Attendance, SCORE_STEP, ScoreField, SessionBook, SessionDate, SessionDateError, SessionDay,
    SessionRecord,
};
pub use stats::ClassStats;
pub use student::{Student, StudentDraft, StudentError};
