//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{PortalUiEvent, UiEvent};
use crate::features::router::{View, route};
use crate::features::{home, verify};
use crate::state::{AppState, SubscriptionState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::Portal(portal_event) => handle_portal_event(app, portal_event),
    }
}

fn handle_portal_event(app: &mut AppState, event: PortalUiEvent) -> Vec<UiEffect> {
    match event {
        PortalUiEvent::SnapshotLoaded(snapshot) => {
            app.sync_error = None;
            let categories = snapshot
                .profile
                .as_ref()
                .map(|profile| profile.categories.clone())
                .unwrap_or_default();
            app.home.sync_categories(&categories);
            app.subscription = SubscriptionState::Ready { snapshot };
            vec![]
        }
        PortalUiEvent::SnapshotFailed { error } => {
            tracing::warn!(%error, "portal refresh failed");
            app.sync_error = Some(error);
            vec![]
        }
        PortalUiEvent::EmailChanged(result) => verify::update::handle_email_changed(app, result),
        PortalUiEvent::VerificationSent(result) => {
            verify::update::handle_verification_sent(app, result)
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: crossterm::event::KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any screen
    if key.code == crossterm::event::KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return vec![UiEffect::Quit];
    }

    match route(app) {
        View::Verify => verify::update::handle_key(app, key),
        View::Home => home::update::handle_key(app, key),
        View::Loading => match key.code {
            crossterm::event::KeyCode::Esc | crossterm::event::KeyCode::Char('q') => {
                vec![UiEffect::Quit]
            }
            _ => vec![],
        },
        // The runtime exits before a redirect screen could take input.
        View::Redirect(_) => vec![],
    }
}
