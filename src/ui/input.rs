use crate::todos::VisibilityFilter;
use crate::ui::add_todo::AddTodoIntent;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press onto the app.
///
/// Ctrl+Q/Esc quit, Enter adds, Ctrl+T toggles the selected todo,
/// F1/F2/F3 pick a filter, arrows move the selection, everything else edits
/// the input line.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_selected();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.edit_input(AddTodoIntent::Backspace),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::F(1) => app.set_filter(VisibilityFilter::ShowAll),
        KeyCode::F(2) => app.set_filter(VisibilityFilter::ShowActive),
        KeyCode::F(3) => app.set_filter(VisibilityFilter::ShowCompleted),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_input(AddTodoIntent::Insert(ch))
        }
        _ => {}
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    app.edit_input(AddTodoIntent::Paste(text));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
