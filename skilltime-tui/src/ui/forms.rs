use super::utils::{centered_rect, project_color};
use super::*;
use crate::app::{EntryField, ProjectField, TextInput};

fn field_line(label: &str, value: String, focused: bool, value_color: Color) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut value_style = Style::default().fg(value_color);
    if focused {
        value_style = value_style.add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled(format!("{:>12}: ", label), label_style),
        Span::styled(value, value_style),
    ])
}

fn text_field(label: &str, input: &TextInput, focused: bool) -> Line<'static> {
    field_line(label, input_text(input, focused), focused, Color::White)
}

fn popup(frame: &mut Frame, title: &str, height: u16, mut lines: Vec<Line<'static>>) {
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);
    lines.push(Line::from(""));
    lines.push(controls_line(&[
        ("Tab", "Next field"),
        ("Enter", "Save"),
        ("Esc", "Cancel"),
    ]));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_project_form(frame: &mut Frame, app: &App) {
    let Some(form) = &app.project_form else {
        return;
    };
    let title = if form.editing.is_some() {
        "Edit Project"
    } else {
        "New Project"
    };
    let focused = form.focused_field;
    let lines = vec![
        Line::from(""),
        text_field("Name", &form.name, focused == ProjectField::Name),
        text_field("Client", &form.client, focused == ProjectField::Client),
        text_field("Hourly rate", &form.rate, focused == ProjectField::Rate),
        field_line(
            "Color",
            format!("● {}  (Space to change)", form.color),
            focused == ProjectField::Color,
            project_color(form.color),
        ),
    ];
    popup(frame, title, 11, lines);
}

pub fn render_entry_form(frame: &mut Frame, app: &App) {
    let Some(form) = &app.entry_form else {
        return;
    };
    let title = if form.editing.is_some() {
        "Edit Entry"
    } else {
        "Log Time Manually"
    };
    let focused = form.focused_field;
    let date_line = if form.editing.is_some() {
        field_line(
            "Date",
            form.date.value.clone(),
            focused == EntryField::Date,
            Color::DarkGray,
        )
    } else {
        text_field("Date", &form.date, focused == EntryField::Date)
    };
    let lines = vec![
        Line::from(""),
        field_line(
            "Project",
            format!("◀ {} ▶", app.entry_form_project_name()),
            focused == EntryField::Project,
            Color::White,
        ),
        date_line,
        text_field("Hours", &form.hours, focused == EntryField::Hours),
        text_field("Minutes", &form.minutes, focused == EntryField::Minutes),
        text_field(
            "Description",
            &form.description,
            focused == EntryField::Description,
        ),
    ];
    popup(frame, title, 12, lines);
}

pub fn render_description_editor(frame: &mut Frame, app: &App) {
    let area = centered_rect(64, 7, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            input_text(&app.description_input, true),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        controls_line(&[("Enter", "Save"), ("Esc", "Cancel"), ("Ctrl+U", "Clear")]),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Description ")
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
