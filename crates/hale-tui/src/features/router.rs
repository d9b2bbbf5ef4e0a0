//! View selection.
//!
//! `route` is a pure function from state to the screen that should be
//! visible. Navigation is never performed here: redirect decisions are
//! returned to the runtime, which exits the TUI and hands the target to the
//! hosting shell.

use crate::state::{AppState, SubscriptionState};

/// Where the hosting shell should navigate after the TUI exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The viewer holds the admin role and belongs in the admin console.
    AdminConsole,
    /// No authenticated member; back to the landing page.
    Landing,
}

/// The screen selected for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Subscription not ready yet.
    Loading,
    /// Terminal decision; the shell performs the navigation.
    Redirect(RedirectTarget),
    /// Email verification screen (change / resend form).
    Verify,
    /// The authenticated home screen.
    Home,
}

/// Selects the visible screen. Evaluated in strict order, first match wins:
///
/// 1. admin role        -> redirect to the admin console
/// 2. subscription not ready -> loading
/// 3. no session or no profile -> redirect to landing
/// 4. email unverified  -> verification screen
/// 5. otherwise         -> home
pub fn route(app: &AppState) -> View {
    if let Some(session) = app.subscription.session()
        && session.is_admin()
    {
        return View::Redirect(RedirectTarget::AdminConsole);
    }

    let SubscriptionState::Ready { snapshot } = &app.subscription else {
        return View::Loading;
    };

    let Some(session) = &snapshot.session else {
        return View::Redirect(RedirectTarget::Landing);
    };
    if snapshot.profile.is_none() {
        return View::Redirect(RedirectTarget::Landing);
    }

    if !session.email_verified {
        return View::Verify;
    }

    View::Home
}
