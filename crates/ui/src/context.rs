use std::sync::Arc;

use goclass_core::model::SessionDate;
use services::ClassroomService;

pub trait UiApp: Send + Sync {
    /// Date the classroom screen opens on.
    fn today(&self) -> SessionDate;

    fn classroom(&self) -> Arc<ClassroomService>;
}

#[derive(Clone)]
pub struct AppContext {
    today: SessionDate,
    classroom: Arc<ClassroomService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            today: app.today(),
            classroom: app.classroom(),
        }
    }

    #[must_use]
    pub fn today(&self) -> SessionDate {
        self.today
    }

    #[must_use]
    pub fn classroom(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classroom)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
