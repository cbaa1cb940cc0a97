//! Login form

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::{LoginField, LoginState};
use crate::theme::Theme;

use super::layout::centered_rect;

/// Draw the login card as a centered overlay
pub fn draw(frame: &mut Frame, login: &LoginState, theme: &Theme) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let card = centered_rect(50, 60, area);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(" 🎓 Smart Learning System ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Length(3), // student id field
        Constraint::Length(3), // password field
        Constraint::Length(2), // status
        Constraint::Min(1),    // hints
    ])
    .split(inner);

    let subtitle = Paragraph::new("Đăng nhập bằng tài khoản TLU")
        .style(Style::default().fg(theme.fg_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[0]);

    draw_field(
        frame,
        rows[1],
        "Mã sinh viên",
        &login.student_id,
        "Nhập mã sinh viên...",
        login.focus == LoginField::StudentId,
        false,
        theme,
    );
    draw_field(
        frame,
        rows[2],
        "Mật khẩu",
        &login.password,
        "Nhập mật khẩu...",
        login.focus == LoginField::Password,
        true,
        theme,
    );

    let status = if login.submitting {
        Line::from(Span::styled("Đang đăng nhập...", Style::default().fg(theme.fg_muted)))
    } else if let Some(ref error) = login.error {
        Line::from(Span::styled(error.as_str(), Style::default().fg(theme.error)))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[3]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "[Tab] Chuyển ô    [Enter] Đăng nhập    [Esc] Thoát",
        Style::default().fg(theme.fg_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[4]);
}

/// Draw one bordered input field
fn draw_field(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    masked: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.border_focused } else { theme.border };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(theme.fg_muted))
    } else if masked {
        Span::styled("•".repeat(value.chars().count()), Style::default().fg(theme.fg_primary))
    } else {
        Span::styled(value.to_string(), Style::default().fg(theme.fg_primary))
    };

    let content = if focused {
        Line::from(vec![
            content,
            Span::styled("█", Style::default().fg(theme.accent_primary).add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        Line::from(content)
    };

    frame.render_widget(Paragraph::new(content), inner);
}
