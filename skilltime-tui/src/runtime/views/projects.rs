use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_projects_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.project_list_down(),
        KeyCode::Up | KeyCode::Char('k') => app.project_list_up(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_project_form(),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => app.open_edit_project_form(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.confirm_delete_project(),
        _ => {}
    }
}
