//! Home feature view.
//!
//! Two-column layout: category filters in a side menu, and a placeholder
//! calendar of the current month in the main pane.

use chrono::{Datelike, Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

const MENU_WIDTH: u16 = 24;

/// Renders the home screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    render_menu(app, frame, columns[0]);
    render_calendar(frame, columns[1]);
    render_status(app, frame, rows[1]);
}

fn render_menu(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Categories");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .home
        .categories
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let checkbox = if category.enabled { "[x]" } else { "[ ]" };
            let pointer = if idx == app.home.selected { ">" } else { " " };
            let style = if idx == app.home.selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{pointer} {checkbox} {}", category.name),
                style,
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_calendar(frame: &mut Frame, area: Rect) {
    let today = Local::now().date_naive();
    let title = today.format(" %B %Y ").to_string();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = month_grid(today.year(), today.month())
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if idx == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(row, style))
        })
        .collect();

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}

fn render_status(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        "↑/↓ select · space toggle · q quit",
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(session) = app.subscription.session() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("signed in as {}", session.username),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Builds a text grid for a month: a weekday header row followed by one row
/// per week, days right-aligned in two-character cells.
fn month_grid(year: i32, month: u32) -> Vec<String> {
    let mut lines = vec!["Su Mo Tu We Th Fr Sa".to_string()];

    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return lines;
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let Some(next_month) = next_month else {
        return lines;
    };
    let days = next_month.signed_duration_since(first).num_days();
    let offset = first.weekday().num_days_from_sunday() as i64;

    let mut week: Vec<String> = vec!["  ".to_string(); offset as usize];
    for day in 1..=days {
        week.push(format!("{day:>2}"));
        if week.len() == 7 {
            lines.push(week.join(" "));
            week.clear();
        }
    }
    if !week.is_empty() {
        lines.push(week.join(" "));
    }

    lines
}
