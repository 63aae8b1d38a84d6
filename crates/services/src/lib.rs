#![forbid(unsafe_code)]

pub mod app_services;
pub mod classroom_service;
pub mod error;
pub mod roster_service;
pub mod session_service;

pub use goclass_core::Clock;

pub use app_services::AppServices;
pub use classroom_service::{ClassroomRow, ClassroomService, ClassroomSnapshot};
pub use error::{AppServicesError, ClassroomError, RosterServiceError, SessionServiceError};
pub use roster_service::RosterService;
pub use session_service::SessionService;
