use super::*;
use skilltime::export::format_date;
use skilltime::{total_minutes, EntryUpdate, ManualEntryForm, ProjectForm, TrackerError};
use time::macros::format_description;
use time::Date;

/// Parse `YYYY-MM-DD`.
pub fn parse_date_str(s: &str) -> Option<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Empty input counts as zero.
fn parse_count(input: &TextInput) -> Option<u32> {
    let trimmed = input.value.trim();
    if trimmed.is_empty() {
        Some(0)
    } else {
        trimmed.parse().ok()
    }
}

impl App {
    pub fn open_add_project_form(&mut self) {
        self.project_form = Some(ProjectFormState::blank());
        self.navigate_to(View::ProjectForm);
    }

    /// Open the project form pre-filled from the highlighted project.
    pub fn open_edit_project_form(&mut self) {
        let Some(project) = self.tracker.projects().get(self.project_list_index) else {
            return;
        };
        let form = ProjectForm::from_project(project);
        self.project_form = Some(ProjectFormState {
            editing: Some(project.id.clone()),
            name: TextInput::with_value(&form.name),
            client: TextInput::with_value(&form.client),
            rate: TextInput::with_value(&format!("{}", form.hourly_rate)),
            color: form.color,
            focused_field: ProjectField::Name,
        });
        self.navigate_to(View::ProjectForm);
    }

    pub fn project_form_input_char(&mut self, c: char) {
        let Some(form) = self.project_form.as_mut() else {
            return;
        };
        if form.focused_field == ProjectField::Rate && !(c.is_ascii_digit() || c == '.') {
            return;
        }
        if let Some(input) = form.focused_input() {
            input.insert(c);
        }
    }

    pub fn project_form_backspace(&mut self) {
        if let Some(input) = self.project_form.as_mut().and_then(|f| f.focused_input()) {
            input.backspace();
        }
    }

    pub fn project_form_cycle_color(&mut self) {
        if let Some(form) = self.project_form.as_mut() {
            if form.focused_field == ProjectField::Color {
                form.color = form.color.next();
            }
        }
    }

    /// Validate and apply the project form. The form stays open on error.
    pub fn submit_project_form(&mut self) {
        let Some(state) = self.project_form.clone() else {
            return;
        };
        let Ok(hourly_rate) = state.rate.value.trim().parse::<f64>() else {
            self.set_status("Error: hourly rate must be a number");
            return;
        };
        let form = ProjectForm::new(state.name.value.clone(), state.client.value.clone(), hourly_rate)
            .with_color(state.color);

        let result = match &state.editing {
            Some(id) => self
                .tracker
                .update_project(id, &form)
                .map(|_| format!("Project updated: {}", form.name.trim())),
            None => self
                .tracker
                .add_project(&form)
                .map(|p| format!("Project added: {}", p.name)),
        };
        match result {
            Ok(message) => {
                self.project_form = None;
                self.return_to_tab();
                self.clamp_project_index();
                self.set_status(message);
            }
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    pub fn cancel_project_form(&mut self) {
        self.project_form = None;
        self.return_to_tab();
        self.set_status("Cancelled");
    }

    pub fn open_manual_entry_form(&mut self) {
        let today = format_date(self.now().date());
        let project_index = self
            .entry_filter
            .project_id
            .as_ref()
            .or(self.tracker.timer().project_id.as_ref())
            .and_then(|id| self.tracker.projects().iter().position(|p| &p.id == id))
            .or(if self.tracker.projects().is_empty() {
                None
            } else {
                Some(0)
            });
        self.entry_form = Some(EntryFormState::blank(&today, project_index));
        self.navigate_to(View::EntryForm);
    }

    /// Open the entry form pre-filled from the highlighted entry.
    pub fn open_edit_entry_form(&mut self) {
        let Some(entry) = self.visible_entries().get(self.entry_list_index).map(|e| (*e).clone()) else {
            return;
        };
        let project_index = self
            .tracker
            .projects()
            .iter()
            .position(|p| p.id == entry.project_id);
        let minutes = entry.duration_minutes();
        self.entry_form = Some(EntryFormState {
            editing: Some(entry.id.clone()),
            project_index,
            date: TextInput::with_value(&format_date(entry.start_time.date())),
            hours: TextInput::with_value(&(minutes / 60).to_string()),
            minutes: TextInput::with_value(&(minutes % 60).to_string()),
            description: TextInput::with_value(&entry.description),
            focused_field: EntryField::Hours,
        });
        self.navigate_to(View::EntryForm);
    }

    pub fn entry_form_input_char(&mut self, c: char) {
        let Some(form) = self.entry_form.as_mut() else {
            return;
        };
        if !form.accepts(c) {
            return;
        }
        if let Some(input) = form.focused_input() {
            input.insert(c);
        }
    }

    pub fn entry_form_backspace(&mut self) {
        if let Some(input) = self.entry_form.as_mut().and_then(|f| f.focused_input()) {
            input.backspace();
        }
    }

    /// Step the project field through the registry.
    pub fn entry_form_cycle_project(&mut self, forward: bool) {
        let count = self.tracker.projects().len();
        let Some(form) = self.entry_form.as_mut() else {
            return;
        };
        if form.focused_field != EntryField::Project || count == 0 {
            return;
        }
        form.project_index = Some(match (form.project_index, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    pub fn entry_form_project_name(&self) -> String {
        self.entry_form
            .as_ref()
            .and_then(|f| f.project_index)
            .and_then(|i| self.tracker.projects().get(i))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "[None]".to_string())
    }

    /// Create or update the entry. The form stays open on error.
    pub fn submit_entry_form(&mut self) {
        let Some(state) = self.entry_form.clone() else {
            return;
        };
        let project_id = state
            .project_index
            .and_then(|i| self.tracker.projects().get(i))
            .map(|p| p.id.clone());
        let (Some(hours), Some(minutes)) = (parse_count(&state.hours), parse_count(&state.minutes))
        else {
            self.set_status("Error: hours and minutes must be whole numbers");
            return;
        };

        let result: Result<String, TrackerError> = match &state.editing {
            Some(id) => {
                total_minutes(hours, minutes).and_then(|total| {
                    let update = EntryUpdate {
                        project_id,
                        description: Some(state.description.value.trim().to_string()),
                        duration_minutes: Some(total),
                    };
                    self.tracker
                        .update_entry(id, &update)
                        .map(|_| "Entry updated".to_string())
                })
            }
            None => {
                let Some(date) = parse_date_str(&state.date.value) else {
                    self.set_status("Error: date must be YYYY-MM-DD");
                    return;
                };
                let form = ManualEntryForm {
                    project_id,
                    date,
                    hours,
                    minutes,
                    description: state.description.value.clone(),
                };
                self.tracker
                    .add_manual_entry(&form, self.offset)
                    .map(|e| format!("Logged {}h {}m on {}", hours, minutes, e.project_name))
            }
        };

        match result {
            Ok(message) => {
                self.entry_form = None;
                self.return_to_tab();
                self.clamp_entry_index();
                self.set_status(message);
            }
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    pub fn cancel_entry_form(&mut self) {
        self.entry_form = None;
        self.return_to_tab();
        self.set_status("Cancelled");
    }
}
