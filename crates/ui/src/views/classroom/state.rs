use std::sync::Arc;

use dioxus::prelude::*;
use goclass_core::model::{SessionDate, StudentId};
use services::ClassroomService;

use crate::views::ViewError;
use crate::vm::{ClassroomVm, map_classroom};

/// Signals backing the classroom screen. All fields are `Copy` handles.
#[derive(Clone, Copy)]
pub struct ClassroomState {
    pub selected_date: Signal<SessionDate>,
    pub search_query: Signal<String>,
    pub show_add_dialog: Signal<bool>,
    pub draft_name: Signal<String>,
    pub draft_class: Signal<String>,
    pub pending_delete: Signal<Option<StudentId>>,
    pub error: Signal<Option<ViewError>>,
    pub snapshot_resource: Resource<ClassroomVm>,
}

pub fn use_classroom_state(today: SessionDate, classroom: Arc<ClassroomService>) -> ClassroomState {
    let selected_date = use_signal(|| today);
    let search_query = use_signal(String::new);
    let show_add_dialog = use_signal(|| false);
    let draft_name = use_signal(String::new);
    let draft_class = use_signal(String::new);
    let pending_delete = use_signal(|| None);
    let error = use_signal(|| None);

    // Re-runs whenever the date or search term changes; reads never write.
    let snapshot_resource = use_resource(move || {
        let classroom = Arc::clone(&classroom);
        let date = selected_date();
        let query = search_query();
        async move { map_classroom(&classroom.snapshot(date, &query).await) }
    });

    ClassroomState {
        selected_date,
        search_query,
        show_add_dialog,
        draft_name,
        draft_class,
        pending_delete,
        error,
        snapshot_resource,
    }
}
