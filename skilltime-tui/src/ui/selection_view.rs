use super::utils::project_color;
use super::*;

pub fn render_project_selection(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Project list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let search_text = if app.project_search_input.value.is_empty() {
        "█ Type to search...".to_string()
    } else {
        input_text(&app.project_search_input, true)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    let items: Vec<ListItem> = app
        .filtered_projects
        .iter()
        .map(|project| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(project_color(project.color))),
                Span::raw(project.name.clone()),
                Span::styled(
                    format!("  {}", project.client),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    // Show count: filtered / total
    let total = app.tracker.projects().len();
    let title = if app.project_search_input.value.is_empty() {
        format!(" Projects ({}) ", total)
    } else {
        format!(" Projects ({}/{}) ", app.filtered_projects.len(), total)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.filtered_projects.is_empty() {
        state.select(Some(app.filtered_project_index));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);

    render_controls(
        frame,
        chunks[2],
        &[("Type", "Filter"), ("↑↓", "Move"), ("Enter", "Select"), ("Esc", "Cancel")],
    );
}
