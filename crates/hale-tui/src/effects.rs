//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Refresh the portal subscription snapshot.
    RefreshSnapshot { task: TaskId },

    /// Request a change of the account's primary email address.
    ChangeEmail { task: TaskId, email: String },

    /// Ask the portal to resend the verification email.
    ResendVerification { task: TaskId },
}
