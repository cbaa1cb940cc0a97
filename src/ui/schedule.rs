//! Schedule screen: current semester course list

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::app::state::AppState;
use crate::theme::Theme;

use super::layout;

/// Draw the schedule screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 📅 Lịch học học kỳ này ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.schedule.loading {
        layout::draw_loading(frame, inner, theme);
        return;
    }
    if let Some(ref error) = state.schedule.error {
        layout::draw_error(frame, inner, error, theme);
        return;
    }
    let Some(ref entries) = state.schedule.data else {
        layout::draw_loading(frame, inner, theme);
        return;
    };

    if entries.is_empty() {
        let empty = Paragraph::new("Không có môn học nào trong học kỳ này.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(["Mã môn", "Tên môn", "Giảng viên"])
        .style(Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.subject_code.clone(),
                entry.subject_name.clone(),
                entry.teacher_name.clone().unwrap_or_else(|| "N/A".to_string()),
            ])
            .style(Style::default().fg(theme.fg_primary))
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(12), Constraint::Percentage(55), Constraint::Percentage(30)],
    )
    .header(header);

    frame.render_widget(table, inner);
}
