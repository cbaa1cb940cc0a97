//! Top navigation bar

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Draw the navbar: route tabs on the left, identity and hints on the right
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Smart Learning System ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(40)]).split(inner);

    let mut spans = Vec::new();
    for (i, screen) in Screen::TABS.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, screen.title());
        let style = if *screen == state.screen {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let name = state.student.as_ref().map(|s| s.name.as_str()).unwrap_or_default();
    let identity = Line::from(vec![
        Span::styled(format!("🎓 {name}  "), Style::default().fg(theme.fg_primary)),
        Span::styled("[x] Đăng xuất", Style::default().fg(theme.fg_muted)),
    ]);
    frame.render_widget(
        Paragraph::new(identity).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
