mod actions;
mod components;
pub(crate) mod state;
mod view;

pub use view::ClassroomView;

#[cfg(test)]
pub(crate) use view::ClassroomTestHandles;
