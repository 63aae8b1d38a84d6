use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
}

/// Current state of `resource`. A reload keeps showing the last value.
#[must_use]
pub fn view_state_from_resource<T: Clone>(resource: &Resource<T>) -> ViewState<T> {
    if let Some(data) = resource.value().read().as_ref() {
        return ViewState::Ready(data.clone());
    }
    match resource.state().cloned() {
        UseResourceState::Pending | UseResourceState::Ready => ViewState::Loading,
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
