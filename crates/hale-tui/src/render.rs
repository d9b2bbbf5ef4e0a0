//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects. Which screen is drawn is
//! decided by the router.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::router::{View, route};
use crate::features::{home, verify};
use crate::state::AppState;

/// Spinner frames for the loading screen.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    match route(app) {
        View::Loading => render_loading(app, frame),
        View::Verify => verify::render::render(app, frame),
        View::Home => home::render::render(app, frame),
        // The runtime exits before the next frame of a redirect is drawn.
        View::Redirect(_) => {}
    }
}

fn render_loading(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Loading"),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if let Some(error) = &app.sync_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Portal unreachable: {error}"),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(Span::styled(
            "Retrying on the next refresh. q to quit.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}
