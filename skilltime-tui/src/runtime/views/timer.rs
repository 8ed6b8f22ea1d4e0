use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};
use skilltime::TimerPhase;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char(' ') => enqueue_action(action_tx, Action::ToggleTimer),
        KeyCode::Char('s') | KeyCode::Char('S') => enqueue_action(action_tx, Action::StopTimer),
        KeyCode::Char('p') | KeyCode::Char('P') => {
            // Project is fixed for the whole session.
            if app.timer_phase() == TimerPhase::Idle {
                app.navigate_to(View::SelectProject);
            } else {
                app.set_status("Stop the timer before switching project");
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('d') | KeyCode::Char('D') => {
            app.navigate_to(View::EditDescription);
        }
        _ => {}
    }
}
