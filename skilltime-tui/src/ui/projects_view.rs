use super::utils::{format_minutes, project_color};
use super::*;

pub fn render_projects_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(body);

    let projects = app.tracker.projects();
    let items: Vec<ListItem> = if projects.is_empty() {
        vec![ListItem::new(Span::styled(
            "No projects yet - press A to add one",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        projects
            .iter()
            .map(|project| {
                let logged: u32 = app
                    .tracker
                    .entries()
                    .iter()
                    .filter(|e| e.project_id == project.id)
                    .map(|e| e.duration_minutes())
                    .sum();
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(project_color(project.color))),
                    Span::styled(
                        format!("{:<28}", project.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:<24}", project.client),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:>10}/h", app.format_money(project.hourly_rate))),
                    Span::styled(
                        format!("{:>10}", format_minutes(logged)),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Projects ({}) ", projects.len()))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !projects.is_empty() {
        state.select(Some(app.project_list_index));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_controls(
        frame,
        chunks[1],
        &[
            ("↑↓", "Move"),
            ("A", "Add"),
            ("E", "Edit"),
            ("D", "Delete"),
            ("Tab", "Next tab"),
            ("Q", "Quit"),
        ],
    );
}
