use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs},
    Frame,
};

mod delete_dialog;
mod entries_view;
mod forms;
mod projects_view;
mod selection_view;
mod timer_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_tabs(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Timer | View::Projects | View::Entries => render_tab(frame, app, app.current_view, body),
        View::SelectProject => selection_view::render_project_selection(frame, app, body),
        View::EditDescription => {
            render_tab(frame, app, app.previous_view, body);
            forms::render_description_editor(frame, app);
        }
        View::ProjectForm => {
            render_tab(frame, app, app.previous_view, body);
            forms::render_project_form(frame, app);
        }
        View::EntryForm => {
            render_tab(frame, app, app.previous_view, body);
            forms::render_entry_form(frame, app);
        }
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
    }

    render_status_line(frame, root[2], app);
}

fn render_tab(frame: &mut Frame, app: &App, view: View, body: Rect) {
    match view {
        View::Projects => projects_view::render_projects_view(frame, app, body),
        View::Entries => entries_view::render_entries_view(frame, app, body),
        _ => timer_view::render_timer_view(frame, app, body),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let active = if app.current_view.is_tab() {
        app.current_view
    } else {
        app.previous_view
    };
    let titles: Vec<Line> = View::TABS
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!(" {} {} ", i + 1, v.title())))
        .collect();
    let selected = View::TABS.iter().position(|v| *v == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SkillLinkup Time Tracker "),
        );
    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    // A failed save outranks everything else.
    let line = if let Some(warning) = app.persist_warning() {
        Line::from(Span::styled(warning, Style::default().fg(Color::Red)))
    } else if let Some(message) = &app.status_message {
        let color = if message.starts_with("Error") || message.starts_with("Cannot") {
            Color::Red
        } else {
            Color::Yellow
        };
        Line::from(Span::styled(message.as_str(), Style::default().fg(color)))
    } else {
        Line::from(Span::styled(
            app.contextual_status(),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

/// Key-hint line: alternating highlighted key and description.
fn controls_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, desc) in pairs {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {}  ", desc)));
    }
    Line::from(spans)
}

fn render_controls(frame: &mut Frame, area: Rect, pairs: &[(&'static str, &'static str)]) {
    let controls = Paragraph::new(controls_line(pairs))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controls ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}

/// Text with a block cursor when focused.
fn input_text(input: &crate::app::TextInput, focused: bool) -> String {
    if focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    }
}
