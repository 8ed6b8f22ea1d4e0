use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_entries_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.entry_list_down(),
        KeyCode::Up | KeyCode::Char('k') => app.entry_list_up(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.cycle_entry_project_filter(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.cycle_entry_range(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear_entry_filters(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.open_manual_entry_form(),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => app.open_edit_entry_form(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.confirm_delete_entry(),
        KeyCode::Char('x') | KeyCode::Char('X') => enqueue_action(action_tx, Action::ExportCsv),
        _ => {}
    }
}
