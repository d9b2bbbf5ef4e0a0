//! Authenticated home screen: category filters and the month calendar.

pub mod render;
pub mod state;
pub mod update;

pub use state::{CategoryFilter, HomeState};
