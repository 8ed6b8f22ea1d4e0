use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use skilltime::{ProjectColor, TimeEntry};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn project_color(color: ProjectColor) -> Color {
    match color {
        ProjectColor::Blue => Color::Blue,
        ProjectColor::Green => Color::Green,
        ProjectColor::Purple => Color::Magenta,
        ProjectColor::Orange => Color::Rgb(255, 165, 0),
        ProjectColor::Red => Color::Red,
        ProjectColor::Teal => Color::Cyan,
    }
}

/// `Xh Ym`, dropping the zero half.
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

pub fn format_entry_day(entry: &TimeEntry) -> String {
    let d = entry.start_time.date();
    let weekday = d.weekday().to_string();
    format!(
        "{} {:04}-{:02}-{:02}",
        &weekday[..3],
        d.year(),
        d.month() as u8,
        d.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_format_drops_zero_parts() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(95), "1h 35m");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 10, outer);
        assert_eq!((inner.x, inner.y, inner.width, inner.height), (25, 15, 50, 10));
    }
}
