//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform portal I/O and return the
//! `UiEvent` carrying the result. The runtime spawns them and routes the
//! event back through the inbox; they never touch state directly.

use std::sync::Arc;

use hale_core::PortalClient;

use crate::events::{PortalUiEvent, UiEvent};

/// Fetches a fresh subscription snapshot.
pub async fn refresh_snapshot(client: Arc<PortalClient>) -> UiEvent {
    match client.fetch_snapshot().await {
        Ok(snapshot) => UiEvent::Portal(PortalUiEvent::SnapshotLoaded(snapshot)),
        Err(err) => UiEvent::Portal(PortalUiEvent::SnapshotFailed {
            error: format!("{err:#}"),
        }),
    }
}

/// Requests the email change and reports the outcome.
pub async fn change_email(client: Arc<PortalClient>, email: String) -> UiEvent {
    let result = client
        .change_email(&email)
        .await
        .map_err(|err| format!("{err:#}"));
    UiEvent::Portal(PortalUiEvent::EmailChanged(result))
}

/// Requests a fresh verification email and reports the outcome.
pub async fn resend_verification(client: Arc<PortalClient>) -> UiEvent {
    let result = client
        .send_verification_link()
        .await
        .map_err(|err| format!("{err:#}"));
    UiEvent::Portal(PortalUiEvent::VerificationSent(result))
}
