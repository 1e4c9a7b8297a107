use crate::ui::app::{App, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Landing => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Char('1') => app.open(Route::Snapshot),
            KeyCode::Char('2') => app.open(Route::Reducer),
            KeyCode::Enter => app.open_selected(),
            _ => {}
        },
        Route::Snapshot | Route::Reducer => match key.code {
            KeyCode::Esc => app.close_example(),
            KeyCode::Enter => app.submit_active(),
            code => app.key_to_field(code),
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
