//! Quiz screen: subject/chapter selection, the running quiz, history and stats

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use crate::app::state::AppState;
use crate::quiz::{QuizSession, QuizStage, QuizTab};
use crate::theme::Theme;

/// Draw the quiz screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let QuizStage::InSession { subject_id, chapter_id, session } = state.quiz.stage() {
        draw_session(frame, area, state, subject_id, *chapter_id, session, theme);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // tab nav
        Constraint::Min(3),    // tab content
        Constraint::Length(1), // status line
    ])
    .split(area);

    draw_tab_nav(frame, chunks[0], state.quiz.tab(), theme);

    match state.quiz.tab() {
        QuizTab::Quiz => draw_selection(frame, chunks[1], state, theme),
        QuizTab::History => draw_history(frame, chunks[1], state, theme),
        QuizTab::Stats => draw_stats(frame, chunks[1], state, theme),
    }

    if let Some(ref status) = state.quiz_view.status {
        let line = Paragraph::new(Span::styled(
            status.clone(),
            Style::default().fg(theme.success),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(line, chunks[2]);
    }
}

/// The three display tabs
fn draw_tab_nav(frame: &mut Frame, area: Rect, active: QuizTab, theme: &Theme) {
    let tabs = [
        (QuizTab::Quiz, "📚 Danh sách quiz"),
        (QuizTab::History, "📜 Lịch sử"),
        (QuizTab::Stats, "📊 Thống kê"),
    ];

    let mut spans = Vec::new();
    for (tab, label) in tabs {
        let style = if tab == active {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("[h/l] Chuyển tab", Style::default().fg(theme.fg_muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Subject or chapter selection, depending on the stage
fn draw_selection(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    match state.quiz.stage() {
        QuizStage::SelectingSubject => draw_subject_list(frame, area, state, theme),
        QuizStage::SelectingChapter { subject_id } => {
            draw_chapter_list(frame, area, state, subject_id, theme)
        }
        QuizStage::InSession { .. } => {}
    }
}

fn draw_subject_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 🎯 Chọn môn học để làm bài trắc nghiệm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (i, subject) in state.quiz.bank().subjects().iter().enumerate() {
        let selected = i == state.quiz_view.cursor;
        let prefix = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        lines.push(Line::from(Span::styled(
            format!("{prefix}📖 {}", subject.name),
            style,
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[j/k] Chọn    [Enter] Xác nhận",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_chapter_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    subject_id: &str,
    theme: &Theme,
) {
    let Ok(subject) = state.quiz.bank().subject(subject_id) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", subject.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "📘 Chọn chương để bắt đầu làm bài kiểm tra",
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(""),
    ];

    for (i, chapter) in subject.chapters.iter().enumerate() {
        let selected = i == state.quiz_view.cursor;
        let prefix = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        lines.push(Line::from(Span::styled(format!("{prefix}{}", chapter.title), style)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[j/k] Chọn    [Enter] Bắt đầu    [Esc] Quay lại",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The running quiz: one question with selectable options
fn draw_session(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    subject_id: &str,
    chapter_id: u32,
    session: &QuizSession,
    theme: &Theme,
) {
    let header = session_header(state, subject_id, chapter_id);

    let block = Block::default()
        .title(format!(" 🧠 {header} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(question) = session.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Câu {} / {}", session.current_index() + 1, session.total()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, choice) in question.choices.iter().enumerate() {
        let selected = i == state.quiz_view.cursor;
        let prefix = if selected { "●" } else { "○" };
        let letter = (b'A' + i as u8) as char;
        let style = if selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        lines.push(Line::from(Span::styled(
            format!("  {prefix} {letter}) {choice}"),
            style,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[j/k] Chọn    [Enter] Trả lời    [Esc] Hủy bài làm",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// "Subject — Chapter" title for the running session
fn session_header(state: &AppState, subject_id: &str, chapter_id: u32) -> String {
    state
        .quiz
        .bank()
        .subject(subject_id)
        .ok()
        .map(|subject| {
            let chapter = subject
                .chapters
                .iter()
                .find(|c| c.id == chapter_id)
                .map(|c| c.title.as_str())
                .unwrap_or_default();
            format!("{} — {}", subject.name, chapter)
        })
        .unwrap_or_default()
}

/// Completed-attempt table, newest first
fn draw_history(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 📜 Lịch sử làm bài ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let records = state.quiz.history().all();
    if records.is_empty() {
        let empty = Paragraph::new("Chưa có bài kiểm tra nào được hoàn thành.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(["Môn học", "Chương", "Điểm (%)", "Thời gian"])
        .style(Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = records
        .iter()
        .map(|r| {
            Row::new(vec![
                r.subject.clone(),
                r.chapter.clone(),
                r.percent.to_string(),
                r.completed_at.clone(),
            ])
            .style(Style::default().fg(theme.fg_primary))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(10),
            Constraint::Percentage(25),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

/// Aggregate statistics over the history
fn draw_stats(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" 📊 Thống kê tổng quan ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let history = state.quiz.history();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Tổng số bài đã làm: ", Style::default().fg(theme.fg_secondary)),
            Span::styled(
                history.len().to_string(),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Điểm trung bình: ", Style::default().fg(theme.fg_secondary)),
            Span::styled(
                format!("{}%", format_average(history.average_percent())),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One-decimal rendering of the average, matching the web front end
fn format_average(average: f64) -> String {
    format!("{average:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_renders_with_one_decimal() {
        assert_eq!(format_average(70.0), "70.0");
        assert_eq!(format_average(66.666), "66.7");
        assert_eq!(format_average(0.0), "0.0");
    }
}
