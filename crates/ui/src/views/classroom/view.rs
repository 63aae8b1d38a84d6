use dioxus::prelude::*;
use goclass_core::model::SessionDate;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::ClassroomIntent;

use super::actions::use_classroom_actions;
use super::components::{AddStudentModal, DeleteStudentModal, StatsPanel, StudentRow};
use super::state::use_classroom_state;

#[component]
pub fn ClassroomView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_classroom_state(ctx.today(), ctx.classroom());
    let dispatch = use_classroom_actions(state, ctx.classroom());

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ClassroomTestHandles>() {
            handles.register(dispatch);
        }
    });

    let snapshot = view_state_from_resource(&state.snapshot_resource);
    let search = state.search_query.read().clone();
    let date_value = state.selected_date.read().to_string();
    let error = *state.error.read();
    let show_add_dialog = *state.show_add_dialog.read();
    let draft_name = state.draft_name.read().clone();
    let draft_class = state.draft_class.read().clone();
    let pending_delete = *state.pending_delete.read();
    let pending_name = pending_delete.map(|id| match &snapshot {
        ViewState::Ready(vm) => vm
            .rows
            .iter()
            .find(|row| row.id == id)
            .map_or_else(|| "This student".to_owned(), |row| row.name.clone()),
        _ => "This student".to_owned(),
    });

    rsx! {
        div { class: "page classroom",
            header { class: "classroom-header",
                h1 { "Go Class" }
                input {
                    class: "classroom-search",
                    r#type: "search",
                    placeholder: "Search name or class",
                    value: "{search}",
                    oninput: move |evt| dispatch.call(ClassroomIntent::Search(evt.value())),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ClassroomIntent::OpenAddDialog),
                    "Add student"
                }
            }

            div { class: "classroom-date",
                label { r#for: "session-date", "Session date" }
                input {
                    id: "session-date",
                    r#type: "date",
                    value: "{date_value}",
                    oninput: move |evt| {
                        if let Ok(date) = evt.value().parse::<SessionDate>() {
                            dispatch.call(ClassroomIntent::SelectDate(date));
                        }
                    },
                }
            }

            if let Some(err) = error {
                div { class: "banner banner--error", role: "alert",
                    span { "{err.message()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ClassroomIntent::DismissError),
                        "Dismiss"
                    }
                }
            }

            match snapshot {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    StatsPanel {
                        date_label: vm.date_label.clone(),
                        cards: vm.stat_cards.clone(),
                        attendance: vm.attendance.clone(),
                    }
                    if vm.rows.is_empty() {
                        p { class: "classroom-empty", "No students found" }
                    } else {
                        ul { class: "student-list",
                            for row in vm.rows {
                                StudentRow { key: "{row.id}", row: row.clone(), on_intent: dispatch }
                            }
                        }
                    }
                },
            }

            if show_add_dialog {
                AddStudentModal { name: draft_name, class: draft_class, on_intent: dispatch }
            }
            if let Some(name) = pending_name {
                DeleteStudentModal { name, on_intent: dispatch }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ClassroomTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<ClassroomIntent>>>>,
}

#[cfg(test)]
impl ClassroomTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ClassroomIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<ClassroomIntent> {
        (*self.dispatch.borrow()).expect("classroom dispatch registered")
    }
}
