//! Tabs with nothing behind them yet.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};

/// Renders a titled card with a centered "coming soon" note.
pub fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    note: &str,
    theme: &Theme,
) {
    let hint = Style::default().fg(parse_color(&theme.statusbar.hint_fg));
    let lines = vec![
        Line::styled(
            format!(" {description}"),
            Style::default().fg(parse_color(&theme.card.title_fg)),
        ),
        Line::from(""),
        Line::from(""),
        Line::styled(note.to_string(), hint).alignment(Alignment::Center),
    ];
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(parse_color(&theme.card.border_fg))),
    );
    f.render_widget(card, area);
}
