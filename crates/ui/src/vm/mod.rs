mod classroom_vm;
mod date_fmt;

pub use classroom_vm::{
    ClassroomIntent, ClassroomVm, ScoreBadgeVm, StatCardVm, StudentRowVm, map_classroom,
};
pub use date_fmt::format_session_date;
