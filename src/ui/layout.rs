//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::theme::Theme;

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Draw a centered loading message
pub fn draw_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let loading = Paragraph::new("Đang tải dữ liệu...")
        .style(Style::default().fg(theme.fg_muted))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

/// Draw a centered error message
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let error = Paragraph::new(message)
        .style(Style::default().fg(theme.error))
        .alignment(Alignment::Center);
    frame.render_widget(error, area);
}
