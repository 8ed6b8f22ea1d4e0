use super::utils::{format_entry_day, format_minutes, project_color};
use super::*;
use skilltime::{DateRange, TimerPhase};

const RECENT_ENTRIES: usize = 5;

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Timer display
            Constraint::Length(3), // Project
            Constraint::Length(3), // Description
            Constraint::Length(4), // Summary cards
            Constraint::Min(3),    // Recent entries
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_timer(frame, chunks[0], app);
    render_project(frame, chunks[1], app);
    render_description(frame, chunks[2], app);
    render_summary_cards(frame, chunks[3], app);
    render_recent_entries(frame, chunks[4], app);

    let controls: &[(&str, &str)] = match app.timer_phase() {
        TimerPhase::Idle => &[
            ("Space", "Start"),
            ("P", "Project"),
            ("N", "Description"),
            ("Tab", "Next tab"),
            ("Q", "Quit"),
        ],
        TimerPhase::Running => &[
            ("Space", "Pause"),
            ("S", "Stop & save"),
            ("N", "Description"),
            ("Q", "Quit"),
        ],
        TimerPhase::Paused => &[
            ("Space", "Resume"),
            ("S", "Stop & save"),
            ("N", "Description"),
            ("Q", "Quit"),
        ],
    };
    render_controls(frame, chunks[5], controls);
}

fn render_timer(frame: &mut Frame, area: Rect, app: &App) {
    let phase = app.timer_phase();
    let (label, color) = match phase {
        TimerPhase::Idle => ("not running", Color::DarkGray),
        TimerPhase::Running => ("⏵ running", Color::Green),
        TimerPhase::Paused => ("⏸ paused", Color::Yellow),
    };
    let text = Line::from(vec![
        Span::styled(
            app.tracker.timer().format_elapsed(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(label, Style::default().fg(color)),
    ]);
    let timer = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Timer ")
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(timer, area);
}

fn render_project(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match app.timer_project() {
        Some(project) => (
            format!("{} ({})", project.name, project.client),
            project_color(project.color),
        ),
        None => ("[None] - press P to choose".to_string(), Color::DarkGray),
    };
    let project = Paragraph::new(text).style(Style::default().fg(color)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Project ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(project, area);
}

fn render_description(frame: &mut Frame, area: Rect, app: &App) {
    let description = &app.tracker.timer().description;
    let (text, color) = if description.is_empty() {
        ("What are you working on?", Color::DarkGray)
    } else {
        (description.as_str(), Color::White)
    };
    let paragraph = Paragraph::new(text).style(Style::default().fg(color)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Description ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

fn render_summary_cards(frame: &mut Frame, area: Rect, app: &App) {
    let summaries = app.tracker.summaries(app.now());
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (range, card) in DateRange::ALL.iter().zip(cards.iter()) {
        let summary = summaries.get(*range);
        let lines = vec![
            Line::from(Span::styled(
                format!("{}h", summary.hours_display()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{}{}", app.currency_symbol, summary.earnings_display()),
                Style::default().fg(Color::Green),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", range.label())),
        );
        frame.render_widget(paragraph, *card);
    }
}

fn render_recent_entries(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.tracker.entries();
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Span::styled(
            "No time logged yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries
            .iter()
            .take(RECENT_ENTRIES)
            .map(|entry| {
                let color = app
                    .project_color(&entry.project_id)
                    .map(project_color)
                    .unwrap_or(Color::DarkGray);
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(
                        format!("{:<16}", format_entry_day(entry)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<24}", entry.project_name),
                        Style::default().fg(Color::White),
                    ),
                    Span::raw(format!("{:>8}  ", format_minutes(entry.duration_minutes()))),
                    Span::styled(
                        app.format_money(entry.earnings()),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Entries ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}
