use super::utils::{format_entry_day, format_minutes, project_color};
use super::*;
use skilltime::Summary;

pub fn render_entries_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Filters + totals
            Constraint::Min(3),    // Entry list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let entries = app.visible_entries();
    render_filter_bar(frame, chunks[0], app, &Summary::of(entries.iter().copied()));

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Span::styled(
            "No entries match the current filters",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries
            .iter()
            .map(|entry| {
                let color = app
                    .project_color(&entry.project_id)
                    .map(project_color)
                    .unwrap_or(Color::DarkGray);
                let description = if entry.description.is_empty() {
                    "-".to_string()
                } else {
                    entry.description.clone()
                };
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(
                        format!("{:<16}", format_entry_day(entry)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<22}", entry.project_name),
                        Style::default().fg(Color::White),
                    ),
                    Span::raw(format!("{:>8}  ", format_minutes(entry.duration_minutes()))),
                    Span::styled(
                        format!("{:>10}  ", app.format_money(entry.earnings())),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(description, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Entries ({}) ", entries.len()))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(app.entry_list_index));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);

    render_controls(
        frame,
        chunks[2],
        &[
            ("P", "Project"),
            ("R", "Range"),
            ("C", "Clear"),
            ("M", "Manual"),
            ("E", "Edit"),
            ("D", "Delete"),
            ("X", "Export CSV"),
        ],
    );
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App, totals: &Summary) {
    let line = Line::from(vec![
        Span::styled("Project: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.entry_filter_project_label(),
            Style::default().fg(Color::White),
        ),
        Span::styled("   Range: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.entry_filter_range().label(),
            Style::default().fg(Color::White),
        ),
        Span::styled("   Total: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}h", totals.hours_display()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}{}", app.currency_symbol, totals.earnings_display()),
            Style::default().fg(Color::Green),
        ),
    ]);
    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(bar, area);
}
