//! Verify feature state.

use crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::TextArea;

/// User-facing result messages for the verification screen.
pub mod messages {
    pub const EMAIL_REQUIRED: &str = "An email address is required.";
    pub const DUPLICATE_EMAIL: &str =
        "Email that was entered is already associated with your account.";
    pub const EMAIL_CHANGED: &str = "Email successfully changed.";
    pub const CHANGE_FAILED: &str = "Unable to change email.";
    pub const EMAIL_SENT: &str = "Email successfully sent.";
    pub const RESEND_FAILED: &str = "Unable to send verification email.";
}

/// Outcome of the last form action.
///
/// At most one of success/error is ever set; both are absent initially and
/// edits unrelated to submission leave the value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Success(&'static str),
    Error(&'static str),
}

impl Feedback {
    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }

    /// True for errors the user can fix by editing the field, as opposed to
    /// portal failures. Used to highlight the input.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Feedback::Error(messages::EMAIL_REQUIRED) | Feedback::Error(messages::DUPLICATE_EMAIL)
        )
    }
}

/// State of the email verification screen.
pub struct VerifyState {
    /// Single-line email input.
    pub input: TextArea<'static>,
    /// Result of the last submit/resend, shown below the form.
    pub feedback: Feedback,
}

impl VerifyState {
    pub fn new() -> Self {
        Self {
            input: Self::email_field(),
            feedback: Feedback::None,
        }
    }

    fn email_field() -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_placeholder_text("you@example.com");
        input.set_cursor_line_style(ratatui::style::Style::default());
        input
    }

    /// The email as typed, trimmed.
    pub fn email(&self) -> String {
        self.input
            .lines()
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }

    pub fn clear_email(&mut self) {
        self.input = Self::email_field();
    }

    /// Routes a key into the email field, keeping it single-line.
    pub fn handle_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
            return;
        }
        self.input.input(key);
    }
}

impl Default for VerifyState {
    fn default() -> Self {
        Self::new()
    }
}
