//! Email verification screen: change-email form, resend action, feedback.

pub mod render;
pub mod state;
pub mod update;

pub use state::{Feedback, VerifyState, messages};
