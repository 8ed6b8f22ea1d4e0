use super::*;
use skilltime::export::format_date;
use skilltime::DateRange;

impl App {
    pub(super) fn clamp_project_index(&mut self) {
        let len = self.tracker.projects().len();
        self.project_list_index = self.project_list_index.min(len.saturating_sub(1));
    }

    pub(super) fn clamp_entry_index(&mut self) {
        let len = self.visible_entries().len();
        self.entry_list_index = self.entry_list_index.min(len.saturating_sub(1));
    }

    pub fn project_list_down(&mut self) {
        if self.project_list_index + 1 < self.tracker.projects().len() {
            self.project_list_index += 1;
        }
    }

    pub fn project_list_up(&mut self) {
        self.project_list_index = self.project_list_index.saturating_sub(1);
    }

    pub fn entry_list_down(&mut self) {
        if self.entry_list_index + 1 < self.visible_entries().len() {
            self.entry_list_index += 1;
        }
    }

    pub fn entry_list_up(&mut self) {
        self.entry_list_index = self.entry_list_index.saturating_sub(1);
    }

    pub fn selected_project_in_list(&self) -> Option<&Project> {
        self.tracker.projects().get(self.project_list_index)
    }

    pub fn selected_entry(&self) -> Option<&TimeEntry> {
        self.visible_entries().get(self.entry_list_index).copied()
    }

    /// All projects, then each project in registry order, then all again.
    pub fn cycle_entry_project_filter(&mut self) {
        let projects = self.tracker.projects();
        let next = match &self.entry_filter.project_id {
            None => projects.first(),
            Some(current) => projects
                .iter()
                .position(|p| &p.id == current)
                .and_then(|i| projects.get(i + 1)),
        };
        self.entry_filter.project_id = next.map(|p| p.id.clone());
        self.entry_list_index = 0;
    }

    pub fn cycle_entry_range(&mut self) {
        self.entry_filter.range = self.entry_filter.range.next();
        self.entry_list_index = 0;
    }

    pub fn clear_entry_filters(&mut self) {
        self.entry_filter = EntryFilter::default();
        self.entry_list_index = 0;
        self.set_status("Filters cleared");
    }

    /// Label of the active project filter.
    pub fn entry_filter_project_label(&self) -> String {
        match &self.entry_filter.project_id {
            None => "All projects".to_string(),
            Some(id) => self
                .tracker
                .project(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.to_string()),
        }
    }

    pub fn entry_filter_range(&self) -> DateRange {
        self.entry_filter.range
    }

    /// Open the confirmation dialog for the highlighted project.
    pub fn confirm_delete_project(&mut self) {
        let Some(project) = self.selected_project_in_list() else {
            return;
        };
        if self.tracker.is_project_in_use(&project.id) {
            let message = format!("Stop the timer before deleting {}", project.name);
            self.set_status(message);
            return;
        }
        let count = self
            .tracker
            .entries()
            .iter()
            .filter(|e| e.project_id == project.id)
            .count();
        let context = DeleteContext {
            target: DeleteTarget::Project(project.id.clone()),
            label: format!("{} ({})", project.name, project.client),
            detail: format!("{} logged entries are kept", count),
            origin: self.current_view,
        };
        self.delete_context = Some(context);
        self.navigate_to(View::ConfirmDelete);
    }

    /// Open the confirmation dialog for the highlighted entry.
    pub fn confirm_delete_entry(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let context = DeleteContext {
            target: DeleteTarget::Entry(entry.id.clone()),
            label: format!("{} - {}", entry.project_name, format_date(entry.start_time.date())),
            detail: format!(
                "{}m, {}",
                entry.duration_minutes(),
                self.format_money(entry.earnings())
            ),
            origin: self.current_view,
        };
        self.delete_context = Some(context);
        self.navigate_to(View::ConfirmDelete);
    }

    pub fn execute_delete(&mut self) {
        let Some(context) = self.delete_context.take() else {
            return;
        };
        let result = match &context.target {
            DeleteTarget::Project(id) => self
                .tracker
                .delete_project(id)
                .map(|p| format!("Project deleted: {}", p.name)),
            DeleteTarget::Entry(id) => self
                .tracker
                .delete_entry(id)
                .map(|_| "Entry deleted".to_string()),
        };
        self.current_view = context.origin;
        if self.entry_filter.project_id.as_ref().is_some_and(|id| self.tracker.project(id).is_none()) {
            self.entry_filter.project_id = None;
        }
        self.clamp_project_index();
        self.clamp_entry_index();
        match result {
            Ok(message) => self.set_status(message),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    pub fn cancel_delete(&mut self) {
        if let Some(context) = self.delete_context.take() {
            self.current_view = context.origin;
        }
        self.set_status("Cancelled");
    }
}
