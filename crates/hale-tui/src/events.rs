//! UI event types.
//!
//! Events are the reducer's only input: terminal input, the tick timer,
//! task lifecycle notifications, and portal results arriving through the
//! runtime's inbox channel.

use hale_core::PortalSnapshot;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick (drives the spinner).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `result` is the event it produced.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// A portal result arrived.
    Portal(PortalUiEvent),
}

/// Results of portal calls, delivered through the inbox.
#[derive(Debug)]
pub enum PortalUiEvent {
    /// A subscription refresh produced a new snapshot.
    SnapshotLoaded(PortalSnapshot),
    /// A subscription refresh failed; the previous snapshot stays current.
    SnapshotFailed { error: String },
    /// The change-email call finished.
    EmailChanged(Result<(), String>),
    /// The resend-verification call finished.
    VerificationSent(Result<(), String>),
}
