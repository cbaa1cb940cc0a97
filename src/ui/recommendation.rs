//! Recommendation screen: personalized study suggestions

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::RecommendationItem;
use crate::app::state::AppState;
use crate::theme::Theme;

use super::layout;

/// Reason shown when the server does not provide one
const DEFAULT_REASON: &str = "AI gợi ý bạn nên củng cố thêm kỹ năng này.";

/// Draw the recommendation screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks =
        Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).split(area);

    draw_student_info(frame, chunks[0], state, theme);
    draw_recommendations(frame, chunks[1], state, theme);
}

/// Student identity header
fn draw_student_info(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 🎓 Thông tin sinh viên ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref student) = state.student else { return };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Họ tên: ", Style::default().fg(theme.fg_muted)),
            Span::styled(student.name.clone(), Style::default().fg(theme.fg_primary)),
        ]),
        Line::from(vec![
            Span::styled("Mã SV: ", Style::default().fg(theme.fg_muted)),
            Span::styled(student.student_id.clone(), Style::default().fg(theme.fg_primary)),
        ]),
    ];
    if let Some(ref major) = student.major {
        lines.push(Line::from(vec![
            Span::styled("Ngành: ", Style::default().fg(theme.fg_muted)),
            Span::styled(major.clone(), Style::default().fg(theme.fg_primary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Recommendation list with the advisory message on top
fn draw_recommendations(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 💡 Gợi ý học liệu cá nhân hóa ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.recommendation.loading {
        layout::draw_loading(frame, inner, theme);
        return;
    }
    if let Some(ref error) = state.recommendation.error {
        layout::draw_error(frame, inner, error, theme);
        return;
    }
    let Some(ref payload) = state.recommendation.data else {
        layout::draw_loading(frame, inner, theme);
        return;
    };

    let mut lines = Vec::new();

    if let Some(ref message) = payload.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.accent_secondary),
        )));
        lines.push(Line::from(""));
    }

    if payload.recommendations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Không có gợi ý nào cho sinh viên này.",
            Style::default().fg(theme.fg_muted),
        )));
    }

    for item in &payload.recommendations {
        lines.extend(card_lines(item, theme));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// The lines of one recommendation card
fn card_lines(item: &RecommendationItem, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title = format!("📘 {}", item.course);
    if let Some(progress) = item.progress {
        title.push_str(&format!("  ({progress:.0}%)"));
    }
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    )));

    let reason = item.reason.clone().unwrap_or_else(|| DEFAULT_REASON.to_string());
    lines.push(Line::from(Span::styled(
        format!("   {reason}"),
        Style::default().fg(theme.fg_secondary),
    )));

    for step in &item.roadmap {
        lines.push(Line::from(Span::styled(
            format!("   • {step}"),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    if let Some(ref link) = item.link {
        lines.push(Line::from(Span::styled(
            format!("   🔗 {link}"),
            Style::default().fg(theme.accent_primary),
        )));
    }

    lines
}
