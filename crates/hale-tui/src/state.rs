//! Application state composition.
//!
//! This module defines the top-level state for the TUI:
//! - `AppState` - everything the reducer owns
//! - `SubscriptionState` - the portal subscription (readiness + snapshot)
//!
//! ```text
//! AppState
//! ├── subscription: SubscriptionState (Connecting | Ready(snapshot))
//! ├── verify: VerifyState             (email input, feedback)
//! ├── home: HomeState                 (category filters)
//! ├── tasks: Tasks                    (in-flight portal calls)
//! └── task_seq: TaskSeq               (async task id generator)
//! ```
//!
//! All mutation happens in the reducer; rendering and routing only read.

use hale_core::{Config, PortalSnapshot, Profile, Session};

use crate::common::{TaskSeq, Tasks};
use crate::features::home::HomeState;
use crate::features::verify::VerifyState;

/// The portal subscription as observed by the UI.
///
/// `Connecting` until the first snapshot lands; afterwards always `Ready`,
/// holding the most recent snapshot. Failed refreshes keep the previous
/// snapshot current.
#[derive(Debug, Clone, Default)]
pub enum SubscriptionState {
    #[default]
    Connecting,
    Ready {
        snapshot: PortalSnapshot,
    },
}

impl SubscriptionState {
    /// True once the first snapshot has arrived.
    pub fn ready(&self) -> bool {
        matches!(self, SubscriptionState::Ready { .. })
    }

    pub fn snapshot(&self) -> Option<&PortalSnapshot> {
        match self {
            SubscriptionState::Connecting => None,
            SubscriptionState::Ready { snapshot } => Some(snapshot),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.snapshot().and_then(|s| s.session.as_ref())
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.snapshot().and_then(|s| s.profile.as_ref())
    }
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Client configuration.
    pub config: Config,
    /// The portal subscription (session + profile).
    pub subscription: SubscriptionState,
    /// Message of the last failed refresh, if any.
    pub sync_error: Option<String>,
    /// Email verification screen state.
    pub verify: VerifyState,
    /// Home screen state.
    pub home: HomeState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            subscription: SubscriptionState::default(),
            sync_error: None,
            verify: VerifyState::new(),
            home: HomeState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
