//! Verify feature view.
//!
//! Rendering for the email-change form, the resend action, and the
//! success/error feedback panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::state::{Feedback, VerifyState};
use crate::state::AppState;

const HEADER: &str =
    "Put in the wrong email address? Well you're in luck! Change your email below.";

/// Renders the verification screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let column = centered_column(frame.area(), 58);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3), // header
            Constraint::Length(3), // email input
            Constraint::Length(3), // actions
            Constraint::Length(4), // feedback / hints
            Constraint::Min(0),
        ])
        .split(column);

    render_header(frame, rows[1]);
    render_email_input(frame, &app.verify, rows[2]);
    render_actions(frame, rows[3]);
    render_feedback(frame, app.verify.feedback, rows[4]);
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(HEADER)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn render_email_input(frame: &mut Frame, verify: &VerifyState, area: Rect) {
    // Highlight the field when the user can fix the error by retyping.
    let border = if verify.feedback.is_field_error() {
        Color::Red
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title("New E-mail Address");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&verify.input, inner);
}

fn render_actions(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let lines = vec![
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw("  change e-mail"),
        ]),
        Line::from(Span::styled(
            "──────────── or ────────────",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Ctrl+R", key_style),
            Span::raw("  resend verification email"),
        ]),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn render_feedback(frame: &mut Frame, feedback: Feedback, area: Rect) {
    let (title, message, color) = match feedback {
        Feedback::None => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Esc to quit",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }
        Feedback::Success(message) => ("Success!", message, Color::Green),
        Feedback::Error(message) => ("Error!", message, Color::Red),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let para = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(para, area);
}
