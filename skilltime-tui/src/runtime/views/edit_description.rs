use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, handle_text_edit_key, text_char};

pub(super) fn handle_edit_description_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SaveDescription),
        KeyCode::Esc => {
            app.return_to_tab();
            app.set_status("Description unchanged");
        }
        KeyCode::Backspace => app.description_input.backspace(),
        _ => {
            if !handle_text_edit_key(key, &mut app.description_input) {
                if let Some(c) = text_char(&key) {
                    app.description_input.insert(c);
                }
            }
        }
    }
}
