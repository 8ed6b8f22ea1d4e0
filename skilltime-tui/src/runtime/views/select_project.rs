use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_text_edit_key, text_char};

pub(super) fn handle_select_project_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.confirm_project_selection(),
        KeyCode::Esc => {
            app.return_to_tab();
            app.set_status("Selection cancelled");
        }
        KeyCode::Down => app.picker_next(),
        KeyCode::Up => app.picker_previous(),
        KeyCode::Backspace => app.search_input_backspace(),
        _ => {
            if handle_text_edit_key(key, &mut app.project_search_input) {
                app.filter_projects();
            } else if let Some(c) = text_char(&key) {
                app.search_input_char(c);
            }
        }
    }
}
