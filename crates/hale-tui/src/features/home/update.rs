//! Home feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key press while the home screen is visible.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => app.home.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.home.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.home.toggle_selected(),
        _ => {}
    }
    vec![]
}
