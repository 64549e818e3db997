//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Small step for Left/Right (MW).
const STEP_MW: f64 = 1.0;
/// Large step for PageUp/PageDown (MW).
const BIG_STEP_MW: f64 = 10.0;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::BackTab => app.select_prev(),
        KeyCode::Down | KeyCode::Tab => app.select_next(),
        KeyCode::Right | KeyCode::Char('+' | '=') => app.adjust(STEP_MW),
        KeyCode::Left | KeyCode::Char('-') => app.adjust(-STEP_MW),
        KeyCode::PageUp => app.adjust(BIG_STEP_MW),
        KeyCode::PageDown => app.adjust(-BIG_STEP_MW),
        KeyCode::Char('1') => app.switch_preset("default"),
        KeyCode::Char('2') => app.switch_preset("renewable_surplus"),
        KeyCode::Char('3') => app.switch_preset("capacity_shortfall"),
        KeyCode::Char('4') => app.switch_preset("zero_load"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
