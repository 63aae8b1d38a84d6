#![forbid(unsafe_code)]

pub mod model;
pub mod seed;
pub mod time;

pub use time::Clock;
