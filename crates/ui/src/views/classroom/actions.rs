use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use goclass_core::model::StudentDraft;
use services::{ClassroomError, ClassroomService};

use crate::views::ViewError;
use crate::vm::ClassroomIntent;

use super::state::ClassroomState;

pub(super) fn use_classroom_actions(
    state: ClassroomState,
    classroom: Arc<ClassroomService>,
) -> Callback<ClassroomIntent> {
    use_callback(move |intent: ClassroomIntent| {
        let ClassroomState {
            mut selected_date,
            mut search_query,
            mut show_add_dialog,
            mut draft_name,
            mut draft_class,
            mut pending_delete,
            mut error,
            ..
        } = state;

        match intent {
            ClassroomIntent::Search(query) => search_query.set(query),
            ClassroomIntent::SelectDate(date) => selected_date.set(date),
            ClassroomIntent::AdjustScore {
                student,
                field,
                delta,
            } => {
                let classroom = Arc::clone(&classroom);
                let date = selected_date();
                run_mutation(state, async move {
                    classroom
                        .adjust_score(date, student, field, delta)
                        .await
                        .map(drop)
                });
            }
            ClassroomIntent::ToggleAttendance(student) => {
                let classroom = Arc::clone(&classroom);
                let date = selected_date();
                run_mutation(state, async move {
                    classroom.toggle_attendance(date, student).await.map(drop)
                });
            }
            ClassroomIntent::OpenAddDialog => show_add_dialog.set(true),
            ClassroomIntent::EditDraftName(name) => draft_name.set(name),
            ClassroomIntent::EditDraftClass(class) => draft_class.set(class),
            ClassroomIntent::SubmitDraft => {
                let draft = StudentDraft::new(draft_name(), draft_class());
                if !draft.is_complete() {
                    return;
                }
                let classroom = Arc::clone(&classroom);
                let date = selected_date();
                let mut resource = state.snapshot_resource;
                spawn(async move {
                    match classroom.add_student(draft, date).await {
                        Ok(_) => {
                            draft_name.set(String::new());
                            draft_class.set(String::new());
                            show_add_dialog.set(false);
                            error.set(None);
                        }
                        Err(err) if err.is_validation() => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "adding student failed");
                            error.set(Some(ViewError::Unknown));
                        }
                    }
                    resource.restart();
                });
            }
            // The draft survives closing so reopening resumes it.
            ClassroomIntent::CloseAddDialog => show_add_dialog.set(false),
            ClassroomIntent::RequestDelete(student) => pending_delete.set(Some(student)),
            ClassroomIntent::CancelDelete => pending_delete.set(None),
            ClassroomIntent::ConfirmDelete => {
                let pending = pending_delete();
                pending_delete.set(None);
                let Some(student) = pending else {
                    return;
                };
                let classroom = Arc::clone(&classroom);
                run_mutation(state, async move {
                    classroom.delete_student(student).await.map(drop)
                });
            }
            ClassroomIntent::DismissError => error.set(None),
        }
    })
}

fn run_mutation<F>(state: ClassroomState, task: F)
where
    F: Future<Output = Result<(), ClassroomError>> + 'static,
{
    let mut error = state.error;
    let mut resource = state.snapshot_resource;
    spawn(async move {
        match task.await {
            Ok(()) => error.set(None),
            Err(err) => {
                tracing::warn!(error = %err, "classroom action failed");
                error.set(Some(ViewError::Unknown));
            }
        }
        resource.restart();
    });
}
