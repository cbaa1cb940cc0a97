//! Dashboard screen: per-course learning progress

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::state::AppState;
use crate::theme::Theme;

use super::layout;

/// Draw the dashboard screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 📈 Tiến độ học tập ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.dashboard.loading {
        layout::draw_loading(frame, inner, theme);
        return;
    }
    if let Some(ref error) = state.dashboard.error {
        layout::draw_error(frame, inner, error, theme);
        return;
    }
    let Some(ref entries) = state.dashboard.data else {
        layout::draw_loading(frame, inner, theme);
        return;
    };

    if entries.is_empty() {
        let empty = Paragraph::new("Chưa có dữ liệu tiến độ cho sinh viên này.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, inner);
        return;
    }

    // One labeled gauge row per course.
    let mut constraints = Vec::with_capacity(entries.len() + 1);
    for _ in entries {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    for (i, entry) in entries.iter().enumerate() {
        let percent = entry.progress.clamp(0.0, 100.0) as u16;
        let color = if entry.progress < 70.0 { theme.warning } else { theme.success };

        let gauge = Gauge::default()
            .block(
                Block::default().title(Line::from(Span::styled(
                    format!(" {} ", entry.course),
                    Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
                ))),
            )
            .gauge_style(Style::default().fg(color).bg(theme.bg_secondary))
            .percent(percent)
            .label(format!("{percent}% hoàn thành"));

        frame.render_widget(gauge, rows[i]);
    }
}
