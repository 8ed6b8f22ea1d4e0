use crate::app::{App, TextInput, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod edit_description;
mod entries;
mod entry_form;
mod project_form;
mod projects;
mod select_project;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.current_view.is_tab() {
        app.clear_status();
        if handle_tab_key(key, app) {
            return;
        }
    }

    match app.current_view {
        View::Timer => timer::handle_timer_key(key, app, action_tx),
        View::Projects => projects::handle_projects_key(key, app),
        View::Entries => entries::handle_entries_key(key, app, action_tx),
        View::SelectProject => select_project::handle_select_project_key(key, app),
        View::EditDescription => {
            edit_description::handle_edit_description_key(key, app, action_tx)
        }
        View::ProjectForm => project_form::handle_project_form_key(key, app, action_tx),
        View::EntryForm => entry_form::handle_entry_form_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}

/// Keys shared by every tab. Returns whether the key was consumed.
fn handle_tab_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.navigate_to(View::Timer),
        KeyCode::Char('2') => app.navigate_to(View::Projects),
        KeyCode::Char('3') => app.navigate_to(View::Entries),
        _ => return false,
    }
    true
}

/// Cursor movement and deletion shared by every text field.
/// Returns whether the key was consumed.
fn handle_text_edit_key(key: KeyEvent, input: &mut TextInput) -> bool {
    match key.code {
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        _ => return false,
    }
    true
}

fn text_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::channel;
    use super::*;
    use crate::app::test_support::app_with_projects;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_switch_tabs() {
        let (tx, _rx) = channel();
        let mut app = app_with_projects(&[]);
        handle_view_key(press(KeyCode::Char('3')), &mut app, &tx);
        assert_eq!(app.current_view, View::Entries);
        handle_view_key(press(KeyCode::Char('2')), &mut app, &tx);
        assert_eq!(app.current_view, View::Projects);
    }

    #[test]
    fn q_in_a_form_is_typed_not_quit() {
        let (tx, _rx) = channel();
        let mut app = app_with_projects(&[]);
        handle_view_key(press(KeyCode::Char('2')), &mut app, &tx);
        handle_view_key(press(KeyCode::Char('a')), &mut app, &tx);
        handle_view_key(press(KeyCode::Char('q')), &mut app, &tx);
        assert!(app.running);
        assert_eq!(app.project_form.as_ref().unwrap().name.value, "q");
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let (tx, _rx) = channel();
        let mut app = app_with_projects(&[]);
        app.navigate_to(View::EditDescription);
        handle_view_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert!(!app.running);
    }

    #[test]
    fn space_on_timer_enqueues_toggle() {
        let (tx, mut rx) = channel();
        let mut app = app_with_projects(&["Design"]);
        handle_view_key(press(KeyCode::Char(' ')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::ToggleTimer));
    }
}
