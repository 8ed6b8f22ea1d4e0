use crate::app::{App, ProjectField};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, handle_text_edit_key, text_char};

pub(super) fn handle_project_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(form) = app.project_form.as_mut() else {
        app.return_to_tab();
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focused_field = form.focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => form.focused_field = form.focused_field.prev(),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitProjectForm),
        KeyCode::Esc => app.cancel_project_form(),
        KeyCode::Backspace => app.project_form_backspace(),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if form.focused_field == ProjectField::Color =>
        {
            app.project_form_cycle_color();
        }
        _ => {
            let consumed = form
                .focused_input()
                .is_some_and(|input| handle_text_edit_key(key, input));
            if !consumed {
                if let Some(c) = text_char(&key) {
                    app.project_form_input_char(c);
                }
            }
        }
    }
}
