use crate::counter::CounterIntent;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key event into app mutations.
///
/// Arrow keys are document-scoped: they go through the binding table
/// before focus is consulted, so they work even while the step field
/// is being edited. Everything else depends on focus.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Up | KeyCode::Down) && app.on_arrow(key.code) {
        return;
    }

    match app.focus() {
        Focus::Counter => handle_counter_key(app, key),
        Focus::StepField => handle_step_field_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.dispatch(CounterIntent::Increment),
        KeyCode::Char('-') => app.dispatch(CounterIntent::Decrement),
        KeyCode::Char('r') => app.dispatch(CounterIntent::Reset),
        KeyCode::Char('s') | KeyCode::Tab => app.focus_step_field(),
        _ => {}
    }
}

fn handle_step_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => app.focus_counter(),
        KeyCode::Backspace => app.step_field_backspace(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.step_field_push(c),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
