//! Logs tab: every system log entry, newest first.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};
use cloak_core::dashboard::{LogEntry, RECENT_LOGS};

/// One log row: severity badge, time, message.
pub fn log_line(entry: &LogEntry, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<9}", format!("[{}]", entry.severity)),
            Style::default()
                .fg(theme.log.color_for(entry.severity))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", entry.time),
            Style::default().fg(parse_color(&theme.statusbar.hint_fg)),
        ),
        Span::raw(entry.message),
    ])
}

pub fn render_logs(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = RECENT_LOGS.iter().map(|e| log_line(e, theme)).collect();
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" System logs ")
            .border_style(Style::default().fg(parse_color(&theme.card.border_fg))),
    );
    f.render_widget(card, area);
}
