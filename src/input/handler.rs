use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events, returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C always quits, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
        UiMode::Progress => handle_progress_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Start / pause
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_timer(Instant::now()),

        // Close out the task
        KeyCode::Char('c') | KeyCode::Char('C') => app.complete_task(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.dismiss_task(),

        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),

        KeyCode::Char('p') | KeyCode::Char('P') => app.show_progress(),

        // Edit inputs, resuming on the last focused field
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Tab => {
            app.start_editing(app.form.focused)
        }
        KeyCode::BackTab => {
            app.focus_previous_field();
            app.start_editing(app.form.focused);
        }

        KeyCode::Char('s') | KeyCode::Char('S') => app.save_defaults(),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing into the form
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
        KeyCode::Tab => app.focus_next_field(),
        KeyCode::BackTab => app.focus_previous_field(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.input_char(c),
        _ => {}
    }
    false
}

/// Handle keys while the progress view is open
fn handle_progress_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc
        | KeyCode::Enter
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('p')
        | KeyCode::Char('P') => app.close_progress(),
        _ => {}
    }
    false
}
