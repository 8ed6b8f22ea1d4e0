use crate::app::{App, EntryField};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, handle_text_edit_key, text_char};

pub(super) fn handle_entry_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(form) = app.entry_form.as_mut() else {
        app.return_to_tab();
        return;
    };
    let on_project = form.focused_field == EntryField::Project;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focused_field = form.focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => form.focused_field = form.focused_field.prev(),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitEntryForm),
        KeyCode::Esc => app.cancel_entry_form(),
        KeyCode::Backspace => app.entry_form_backspace(),
        KeyCode::Left | KeyCode::Char('h') if on_project => app.entry_form_cycle_project(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') if on_project => {
            app.entry_form_cycle_project(true)
        }
        _ => {
            let consumed = form
                .focused_input()
                .is_some_and(|input| handle_text_edit_key(key, input));
            if !consumed {
                if let Some(c) = text_char(&key) {
                    app.entry_form_input_char(c);
                }
            }
        }
    }
}
