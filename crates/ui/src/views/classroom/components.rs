use dioxus::prelude::*;
use goclass_core::model::{SCORE_STEP, StudentId};

use crate::vm::{ClassroomIntent, ScoreBadgeVm, StatCardVm, StudentRowVm};

#[component]
pub fn StatsPanel(date_label: String, cards: Vec<StatCardVm>, attendance: String) -> Element {
    rsx! {
        section { class: "stats-panel",
            for card in cards {
                div { key: "{card.label}", class: "stat-card",
                    span { class: "stat-label", "{card.label}" }
                    span { class: "stat-value", "{card.value}" }
                }
            }
            div { class: "stat-card stat-attendance",
                span { class: "stat-label", "Attendance" }
                span { class: "stat-value", "{attendance}" }
                span { class: "stat-date", "{date_label}" }
            }
        }
    }
}

#[component]
pub fn StudentRow(row: StudentRowVm, on_intent: Callback<ClassroomIntent>) -> Element {
    let id = row.id;
    let mark = row.attendance_mark();
    let attendance_label = row.attendance_label();
    let attendance_class = if row.present {
        "attendance attendance--present"
    } else {
        "attendance attendance--absent"
    };

    rsx! {
        li { class: "student-row",
            div { class: "student-info",
                span { class: "student-name", "{row.name}" }
                span { class: "student-class", "{row.class}" }
            }
            div { class: "student-scores",
                for badge in row.scores {
                    ScoreBadge { key: "{badge.label}", student: id, badge, on_intent }
                }
            }
            button {
                class: "{attendance_class}",
                r#type: "button",
                title: "{attendance_label}",
                onclick: move |_| on_intent.call(ClassroomIntent::ToggleAttendance(id)),
                "{mark}"
            }
            button {
                class: "btn btn-danger student-delete",
                r#type: "button",
                onclick: move |_| on_intent.call(ClassroomIntent::RequestDelete(id)),
                "Delete"
            }
        }
    }
}

#[component]
fn ScoreBadge(
    student: StudentId,
    badge: ScoreBadgeVm,
    on_intent: Callback<ClassroomIntent>,
) -> Element {
    let field = badge.field;
    let badge_class = format!("score-badge score-badge--{}", field.key());

    rsx! {
        div { class: "{badge_class}",
            button {
                class: "score-step",
                r#type: "button",
                onclick: move |_| {
                    on_intent
                        .call(ClassroomIntent::AdjustScore {
                            student,
                            field,
                            delta: -SCORE_STEP,
                        });
                },
                "-"
            }
            span { class: "score-label", "{badge.label}" }
            span { class: "score-value", "{badge.value}" }
            button {
                class: "score-step",
                r#type: "button",
                onclick: move |_| {
                    on_intent
                        .call(ClassroomIntent::AdjustScore {
                            student,
                            field,
                            delta: SCORE_STEP,
                        });
                },
                "+"
            }
        }
    }
}

#[component]
pub fn AddStudentModal(
    name: String,
    class: String,
    on_intent: Callback<ClassroomIntent>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                h3 { class: "modal-title", "New student" }
                form {
                    class: "modal-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_intent.call(ClassroomIntent::SubmitDraft);
                    },
                    label { class: "modal-field",
                        span { "Name" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| on_intent.call(ClassroomIntent::EditDraftName(evt.value())),
                        }
                    }
                    label { class: "modal-field",
                        span { "Class" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{class}",
                            oninput: move |evt| on_intent.call(ClassroomIntent::EditDraftClass(evt.value())),
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| on_intent.call(ClassroomIntent::CloseAddDialog),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteStudentModal(name: String, on_intent: Callback<ClassroomIntent>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_intent.call(ClassroomIntent::CancelDelete),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Delete student?" }
                p { class: "modal-body",
                    "{name} will be removed from the roster. Past session scores are kept."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ClassroomIntent::CancelDelete),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ClassroomIntent::ConfirmDelete),
                        "Delete"
                    }
                }
            }
        }
    }
}
