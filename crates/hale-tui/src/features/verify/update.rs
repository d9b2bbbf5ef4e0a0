//! Verify feature reducer.
//!
//! Form submission, the resend action, and the handling of portal results
//! for both. All feedback transitions happen here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Feedback, messages};
use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key press while the verification screen is visible.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Enter => submit(app),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => resend(app),
        _ => {
            app.verify.handle_input(key);
            vec![]
        }
    }
}

/// Submits the change-email form.
///
/// The duplicate-email case is client-side and never reaches the portal.
/// While a change-email call is in flight, further submits are ignored.
pub fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let email = app.verify.email();
    if email.is_empty() {
        app.verify.feedback = Feedback::Error(messages::EMAIL_REQUIRED);
        return vec![];
    }

    let Some(current_email) = app
        .subscription
        .session()
        .map(|session| session.primary_email.clone())
    else {
        // Not authenticated; nothing to submit against.
        return vec![];
    };

    if email == current_email {
        app.verify.feedback = Feedback::Error(messages::DUPLICATE_EMAIL);
        return vec![];
    }

    if app.tasks.change_email.is_running() {
        return vec![];
    }

    let task = app.task_seq.next_id();
    vec![UiEffect::ChangeEmail { task, email }]
}

/// Requests a fresh verification email.
///
/// No-op when no user is authenticated or a resend is already in flight.
pub fn resend(app: &mut AppState) -> Vec<UiEffect> {
    if app.subscription.session().is_none() {
        return vec![];
    }

    if app.tasks.resend.is_running() {
        return vec![];
    }

    let task = app.task_seq.next_id();
    vec![UiEffect::ResendVerification { task }]
}

/// Handles the result of the change-email call.
///
/// Success also triggers a resend so the new address gets a verification
/// link right away.
pub fn handle_email_changed(app: &mut AppState, result: Result<(), String>) -> Vec<UiEffect> {
    match result {
        Ok(()) => {
            let effects = resend(app);
            app.verify.clear_email();
            app.verify.feedback = Feedback::Success(messages::EMAIL_CHANGED);
            effects
        }
        Err(error) => {
            tracing::warn!(%error, "change email failed");
            app.verify.feedback = Feedback::Error(messages::CHANGE_FAILED);
            vec![]
        }
    }
}

/// Handles the result of the resend-verification call.
pub fn handle_verification_sent(app: &mut AppState, result: Result<(), String>) -> Vec<UiEffect> {
    match result {
        Ok(()) => {
            app.verify.clear_email();
            app.verify.feedback = Feedback::Success(messages::EMAIL_SENT);
            vec![]
        }
        Err(error) => {
            tracing::warn!(%error, "resend verification failed");
            app.verify.feedback = Feedback::Error(messages::RESEND_FAILED);
            vec![]
        }
    }
}
