use crate::config::TrackerConfig;
use skilltime::{EntryFilter, Project, Storage, TimeEntry, TimerPhase, Tracker};
use std::path::PathBuf;
use time::{OffsetDateTime, UtcOffset};

mod entries;
mod forms;
mod selection;
mod state;

pub use state::{
    DeleteContext, DeleteTarget, EntryField, EntryFormState, ProjectField, ProjectFormState,
    TextInput, View,
};

/// Storage behind the running app: a file store, or a memory store in dev mode.
pub type Backend = Box<dyn Storage + Send>;

pub struct App {
    pub running: bool,
    pub tracker: Tracker<Backend>,
    /// Local offset, resolved once at startup.
    pub offset: UtcOffset,
    pub current_view: View,
    /// Tab to return to when an overlay view closes.
    pub previous_view: View,
    pub status_message: Option<String>,
    pub currency_symbol: String,
    pub export_dir: PathBuf,

    // Timer description editing
    pub description_input: TextInput,

    // Fuzzy project picker
    pub project_search_input: TextInput,
    pub filtered_projects: Vec<Project>,
    pub filtered_project_index: usize,

    // Projects tab
    pub project_list_index: usize,

    // Entries tab
    pub entry_filter: EntryFilter,
    pub entry_list_index: usize,

    pub project_form: Option<ProjectFormState>,
    pub entry_form: Option<EntryFormState>,
    pub delete_context: Option<DeleteContext>,
}

impl App {
    pub fn new(tracker: Tracker<Backend>, offset: UtcOffset, cfg: &TrackerConfig) -> Self {
        Self {
            running: true,
            tracker,
            offset,
            current_view: View::Timer,
            previous_view: View::Timer,
            status_message: None,
            currency_symbol: cfg.currency_symbol.clone(),
            export_dir: cfg.export_dir.clone(),
            description_input: TextInput::new(),
            project_search_input: TextInput::new(),
            filtered_projects: Vec::new(),
            filtered_project_index: 0,
            project_list_index: 0,
            entry_filter: EntryFilter::default(),
            entry_list_index: 0,
            project_form: None,
            entry_form: None,
            delete_context: None,
        }
    }

    /// Current wall-clock time in the local offset.
    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Warning shown while the last write to storage failed.
    pub fn persist_warning(&self) -> Option<String> {
        self.tracker
            .last_persist_error()
            .map(|e| format!("Changes not saved: {}", e))
    }

    pub fn navigate_to(&mut self, view: View) {
        if self.current_view.is_tab() {
            self.previous_view = self.current_view;
        }
        self.current_view = view;

        match view {
            View::SelectProject => self.open_project_picker(),
            View::EditDescription => {
                self.description_input = TextInput::with_value(&self.tracker.timer().description);
            }
            View::Projects => self.clamp_project_index(),
            View::Entries => self.clamp_entry_index(),
            _ => {}
        }
    }

    /// Close an overlay view and go back to the tab it was opened from.
    pub fn return_to_tab(&mut self) {
        self.current_view = self.previous_view;
    }

    pub fn next_tab(&mut self) {
        let idx = View::TABS
            .iter()
            .position(|v| *v == self.current_view)
            .unwrap_or(0);
        self.navigate_to(View::TABS[(idx + 1) % View::TABS.len()]);
    }

    pub fn timer_phase(&self) -> TimerPhase {
        self.tracker.timer().phase()
    }

    pub fn timer_project(&self) -> Option<&Project> {
        self.tracker
            .timer()
            .project_id
            .as_ref()
            .and_then(|id| self.tracker.project(id))
    }

    pub fn current_project_name(&self) -> String {
        self.timer_project()
            .map(|p| format!("{} ({})", p.name, p.client))
            .unwrap_or_else(|| "[None]".to_string())
    }

    /// Hint for the status line when there is no explicit message.
    pub fn contextual_status(&self) -> String {
        match self.timer_phase() {
            TimerPhase::Idle if self.timer_project().is_none() => {
                "Select a project (P) to start the timer".to_string()
            }
            TimerPhase::Idle => "Ready - press Space to start".to_string(),
            TimerPhase::Running => "Timer running - Space to pause, S to stop".to_string(),
            TimerPhase::Paused => "Timer paused - Space to resume, S to stop".to_string(),
        }
    }

    pub fn format_money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Entries under the current Entries-tab filter.
    pub fn visible_entries(&self) -> Vec<&TimeEntry> {
        self.tracker.filter_entries(&self.entry_filter, self.now())
    }

    pub fn project_color(&self, project_id: &skilltime::ProjectId) -> Option<skilltime::ProjectColor> {
        self.tracker.project(project_id).map(|p| p.color)
    }
}
