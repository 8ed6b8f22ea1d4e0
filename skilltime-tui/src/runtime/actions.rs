use crate::app::App;
use skilltime::TimerPhase;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::Tick => {
            app.tracker.tick();
        }
        Action::ToggleTimer => toggle_timer(app),
        Action::StopTimer => stop_timer(app),
        Action::SaveDescription => {
            let description = app.description_input.value.trim().to_string();
            app.tracker.set_timer_description(description);
            app.return_to_tab();
            app.set_status("Description saved");
        }
        Action::SubmitProjectForm => app.submit_project_form(),
        Action::SubmitEntryForm => app.submit_entry_form(),
        Action::ConfirmDelete => app.execute_delete(),
        Action::ExportCsv => export_csv(app),
    }
}

fn toggle_timer(app: &mut App) {
    match app.timer_phase() {
        TimerPhase::Running => {
            app.tracker.pause_timer();
            app.set_status("Timer paused");
        }
        phase => {
            let now = app.now();
            match app.tracker.start_timer(now) {
                Ok(()) if phase == TimerPhase::Paused => app.set_status("Timer resumed"),
                Ok(()) => app.set_status(format!("Timer started: {}", app.current_project_name())),
                Err(e) => app.set_status(format!("Cannot start: {}", e)),
            }
        }
    }
}

fn stop_timer(app: &mut App) {
    if app.timer_phase() == TimerPhase::Idle {
        app.set_status("No active timer to stop");
        return;
    }
    let now = app.now();
    let message = match app.tracker.stop_timer(now) {
        Some(entry) => format!(
            "Saved {}m on {} ({}{:.2})",
            entry.duration_minutes(),
            entry.project_name,
            app.currency_symbol,
            entry.earnings()
        ),
        None => "Timer discarded: nothing to save".to_string(),
    };
    app.description_input.clear();
    app.set_status(message);
}

fn export_csv(app: &mut App) {
    let now = app.now();
    match app
        .tracker
        .export_csv(&app.entry_filter, now, &app.export_dir)
    {
        Ok(path) => app.set_status(format!("Exported to {}", path.display())),
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            app.set_status(format!("Export failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_projects;
    use crate::app::View;

    #[test]
    fn toggle_requires_a_project() {
        let mut app = app_with_projects(&["Design"]);
        run_action(Action::ToggleTimer, &mut app);
        assert_eq!(app.timer_phase(), TimerPhase::Idle);
        assert!(app.status_message.as_deref().unwrap().starts_with("Cannot start"));
    }

    #[test]
    fn toggle_runs_pauses_and_resumes() {
        let mut app = app_with_projects(&["Design"]);
        let id = app.tracker.projects()[0].id.clone();
        app.tracker.select_timer_project(Some(id)).unwrap();

        run_action(Action::ToggleTimer, &mut app);
        assert_eq!(app.timer_phase(), TimerPhase::Running);
        run_action(Action::Tick, &mut app);
        run_action(Action::ToggleTimer, &mut app);
        assert_eq!(app.timer_phase(), TimerPhase::Paused);
        run_action(Action::Tick, &mut app);
        assert_eq!(app.tracker.timer().elapsed_seconds, 1);
        run_action(Action::ToggleTimer, &mut app);
        assert_eq!(app.status_message.as_deref(), Some("Timer resumed"));
    }

    #[test]
    fn stopping_short_session_discards_it() {
        let mut app = app_with_projects(&["Design"]);
        let id = app.tracker.projects()[0].id.clone();
        app.tracker.select_timer_project(Some(id)).unwrap();
        run_action(Action::ToggleTimer, &mut app);
        run_action(Action::StopTimer, &mut app);
        assert_eq!(app.timer_phase(), TimerPhase::Idle);
        assert!(app.tracker.entries().is_empty());
    }

    #[test]
    fn stopping_records_entry() {
        let mut app = app_with_projects(&["Design"]);
        let id = app.tracker.projects()[0].id.clone();
        app.tracker.select_timer_project(Some(id)).unwrap();
        run_action(Action::ToggleTimer, &mut app);
        for _ in 0..120 {
            run_action(Action::Tick, &mut app);
        }
        run_action(Action::StopTimer, &mut app);
        assert_eq!(app.tracker.entries().len(), 1);
        assert_eq!(app.tracker.entries()[0].duration_minutes(), 2);
    }

    #[test]
    fn saving_description_returns_to_timer() {
        let mut app = app_with_projects(&[]);
        app.navigate_to(View::EditDescription);
        for c in "  Wireframes ".chars() {
            app.description_input.insert(c);
        }
        run_action(Action::SaveDescription, &mut app);
        assert_eq!(app.current_view, View::Timer);
        assert_eq!(app.tracker.timer().description, "Wireframes");
    }

    #[test]
    fn export_writes_into_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_projects(&["Design"]);
        app.export_dir = dir.path().to_path_buf();
        run_action(Action::ExportCsv, &mut app);
        assert!(app.status_message.as_deref().unwrap().starts_with("Exported to"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
