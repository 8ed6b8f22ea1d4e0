use skilltime::{EntryId, ProjectColor, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Projects,
    Entries,
    SelectProject,
    EditDescription,
    ProjectForm,
    EntryForm,
    ConfirmDelete,
}

impl View {
    /// Top-level tabs, in display order.
    pub const TABS: [View; 3] = [View::Timer, View::Projects, View::Entries];

    pub fn is_tab(self) -> bool {
        Self::TABS.contains(&self)
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Timer => "Timer",
            View::Projects => "Projects",
            View::Entries => "Entries",
            View::SelectProject => "Select Project",
            View::EditDescription => "Description",
            View::ProjectForm => "Project",
            View::EntryForm => "Time Entry",
            View::ConfirmDelete => "Confirm",
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Client,
    Rate,
    Color,
}

impl ProjectField {
    const ORDER: [ProjectField; 4] = [
        ProjectField::Name,
        ProjectField::Client,
        ProjectField::Rate,
        ProjectField::Color,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

/// Add/edit project form. `editing` is set when the form was pre-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFormState {
    pub editing: Option<ProjectId>,
    pub name: TextInput,
    pub client: TextInput,
    pub rate: TextInput,
    pub color: ProjectColor,
    pub focused_field: ProjectField,
}

impl ProjectFormState {
    pub fn blank() -> Self {
        Self {
            editing: None,
            name: TextInput::new(),
            client: TextInput::new(),
            rate: TextInput::new(),
            color: ProjectColor::default(),
            focused_field: ProjectField::Name,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ProjectField::Name => Some(&mut self.name),
            ProjectField::Client => Some(&mut self.client),
            ProjectField::Rate => Some(&mut self.rate),
            ProjectField::Color => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Project,
    Date,
    Hours,
    Minutes,
    Description,
}

impl EntryField {
    const ORDER: [EntryField; 5] = [
        EntryField::Project,
        EntryField::Date,
        EntryField::Hours,
        EntryField::Minutes,
        EntryField::Description,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

/// Manual entry form, also used to edit an existing entry (date is then
/// read-only).
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFormState {
    pub editing: Option<EntryId>,
    pub project_index: Option<usize>,
    pub date: TextInput,
    pub hours: TextInput,
    pub minutes: TextInput,
    pub description: TextInput,
    pub focused_field: EntryField,
}

impl EntryFormState {
    pub fn blank(date: &str, project_index: Option<usize>) -> Self {
        Self {
            editing: None,
            project_index,
            date: TextInput::with_value(date),
            hours: TextInput::new(),
            minutes: TextInput::new(),
            description: TextInput::new(),
            focused_field: EntryField::Project,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Project => None,
            EntryField::Date if self.editing.is_some() => None,
            EntryField::Date => Some(&mut self.date),
            EntryField::Hours => Some(&mut self.hours),
            EntryField::Minutes => Some(&mut self.minutes),
            EntryField::Description => Some(&mut self.description),
        }
    }

    /// Whether typed characters are accepted by the focused field.
    pub fn accepts(&self, c: char) -> bool {
        match self.focused_field {
            EntryField::Project => false,
            EntryField::Date => self.editing.is_none() && (c.is_ascii_digit() || c == '-'),
            EntryField::Hours | EntryField::Minutes => c.is_ascii_digit(),
            EntryField::Description => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Project(ProjectId),
    Entry(EntryId),
}

/// What the confirmation dialog is about to delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub target: DeleteTarget,
    pub label: String,
    pub detail: String,
    pub origin: View,
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, step: usize) -> T {
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(idx + step) % order.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::with_value("hllo");
        input.home();
        input.move_right();
        input.insert('e');
        assert_eq!(input.value, "hello");
        input.end();
        input.backspace();
        assert_eq!(input.value, "hell");
        assert_eq!(input.split_at_cursor(), ("hell", ""));
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::with_value("café");
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("caf", "é"));
        input.end();
        input.backspace();
        assert_eq!(input.value, "caf");
        input.home();
        input.backspace();
        assert_eq!(input.value, "caf");
    }

    #[test]
    fn form_fields_wrap_around() {
        assert_eq!(ProjectField::Color.next(), ProjectField::Name);
        assert_eq!(ProjectField::Name.prev(), ProjectField::Color);
        assert_eq!(EntryField::Description.next(), EntryField::Project);
        assert_eq!(EntryField::Project.prev(), EntryField::Description);
    }

    #[test]
    fn date_is_read_only_when_editing() {
        let mut form = EntryFormState::blank("2024-03-04", Some(0));
        form.focused_field = EntryField::Date;
        assert!(form.accepts('1'));
        form.editing = Some(EntryId::new("e1"));
        assert!(!form.accepts('1'));
        assert!(form.focused_input().is_none());
    }
}
