use super::utils::centered_rect;
use super::*;
use crate::app::DeleteTarget;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, body: Rect) {
    let Some(ctx) = &app.delete_context else {
        return;
    };

    // Originating view in the background
    super::render_tab(frame, app, ctx.origin, body);

    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let title = match ctx.target {
        DeleteTarget::Project(_) => " Delete Project? ",
        DeleteTarget::Entry(_) => " Delete Entry? ",
    };
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            ctx.label.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            ctx.detail.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
