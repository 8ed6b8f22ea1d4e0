use super::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl App {
    pub(super) fn open_project_picker(&mut self) {
        self.project_search_input.clear();
        self.filter_projects();
        let selected = self.tracker.timer().project_id.clone();
        self.filtered_project_index = self
            .filtered_projects
            .iter()
            .position(|p| Some(&p.id) == selected.as_ref())
            .unwrap_or(0);
    }

    /// Fuzzy-match projects on "name client", best score first.
    pub fn filter_projects(&mut self) {
        let projects = self.tracker.projects();
        if self.project_search_input.value.is_empty() {
            self.filtered_projects = projects.to_vec();
            self.filtered_project_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(Project, i64)> = projects
            .iter()
            .filter_map(|project| {
                let haystack = format!("{} {}", project.name, project.client);
                matcher
                    .fuzzy_match(&haystack, &self.project_search_input.value)
                    .map(|score| (project.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_projects = scored.into_iter().map(|(p, _)| p).collect();
        self.filtered_project_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.project_search_input.insert(c);
        self.filter_projects();
    }

    pub fn search_input_backspace(&mut self) {
        self.project_search_input.backspace();
        self.filter_projects();
    }

    pub fn search_input_clear(&mut self) {
        self.project_search_input.clear();
        self.filter_projects();
    }

    pub fn picker_next(&mut self) {
        if !self.filtered_projects.is_empty() {
            self.filtered_project_index =
                (self.filtered_project_index + 1) % self.filtered_projects.len();
        }
    }

    pub fn picker_previous(&mut self) {
        if !self.filtered_projects.is_empty() {
            self.filtered_project_index = if self.filtered_project_index == 0 {
                self.filtered_projects.len() - 1
            } else {
                self.filtered_project_index - 1
            };
        }
    }

    /// Make the highlighted project the timer's project.
    pub fn confirm_project_selection(&mut self) {
        let Some(project) = self.filtered_projects.get(self.filtered_project_index).cloned() else {
            self.set_status("No matching project");
            return;
        };
        match self.tracker.select_timer_project(Some(project.id.clone())) {
            Ok(()) => {
                self.return_to_tab();
                self.set_status(format!("Selected project: {}", project.name));
            }
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app_with_projects;
    use super::*;

    #[test]
    fn empty_search_lists_every_project() {
        let mut app = app_with_projects(&["Brand Refresh", "Checkout Rewrite"]);
        app.navigate_to(View::SelectProject);
        assert_eq!(app.filtered_projects.len(), 2);
    }

    #[test]
    fn search_narrows_to_fuzzy_matches() {
        let mut app = app_with_projects(&["Brand Refresh", "Checkout Rewrite"]);
        app.navigate_to(View::SelectProject);
        for c in "chkout".chars() {
            app.search_input_char(c);
        }
        let names: Vec<&str> = app.filtered_projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Checkout Rewrite"]);
    }

    #[test]
    fn confirming_selects_timer_project_and_returns() {
        let mut app = app_with_projects(&["Brand Refresh", "Checkout Rewrite"]);
        app.navigate_to(View::SelectProject);
        app.picker_next();
        app.confirm_project_selection();
        assert_eq!(app.current_view, View::Timer);
        assert_eq!(app.timer_project().unwrap().name, "Checkout Rewrite");
    }

    #[test]
    fn picker_wraps_around() {
        let mut app = app_with_projects(&["A", "B"]);
        app.navigate_to(View::SelectProject);
        app.picker_previous();
        assert_eq!(app.filtered_project_index, 1);
        app.picker_next();
        assert_eq!(app.filtered_project_index, 0);
    }
}
