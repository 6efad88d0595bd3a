//! Dashboard tab: stat cards, server status and recent events.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};
use cloak_core::dashboard::{
    format_count, recent_events, service_status, LogEntry, OVERVIEW_EVENT_COUNT, STATS,
};

pub fn render_overview(f: &mut Frame, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    render_stat_card(
        f,
        cards[0],
        "Total requests",
        &format_count(STATS.total_requests),
        "+12% today",
        theme,
    );
    render_stat_card(
        f,
        cards[1],
        "Blocked",
        &format_count(STATS.blocked_requests),
        "DDoS attacks",
        theme,
    );
    render_storage_card(f, cards[2], theme);
    render_stat_card(
        f,
        cards[3],
        "Active users",
        &format_count(STATS.active_users),
        "Online now",
        theme,
    );

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_server_status(f, lower[0], theme);
    render_recent_events(f, lower[1], recent_events(OVERVIEW_EVENT_COUNT), theme);
}

fn card_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(parse_color(&theme.card.title_fg)),
        ))
        .border_style(Style::default().fg(parse_color(&theme.card.border_fg)))
}

fn render_stat_card(f: &mut Frame, area: Rect, title: &str, value: &str, caption: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {value}"),
            Style::default()
                .fg(parse_color(&theme.card.value_fg))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {caption}"),
            Style::default().fg(parse_color(&theme.card.title_fg)),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(card_block(title, theme)), area);
}

fn render_storage_card(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = card_block("Storage", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} GB", STATS.storage_used_gb),
            Style::default()
                .fg(parse_color(&theme.card.value_fg))
                .add_modifier(Modifier::BOLD),
        )),
        parts[0],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(parse_color(&theme.card.gauge_fg)))
            .percent(STATS.storage_quota_percent),
        parts[1],
    );
}

fn render_server_status(f: &mut Frame, area: Rect, theme: &Theme) {
    let healthy_fg = parse_color(&theme.card.healthy_fg);
    let label_fg = parse_color(&theme.card.title_fg);

    let lines: Vec<Line> = service_status()
        .into_iter()
        .map(|row| {
            let value_style = if row.healthy {
                Style::default().fg(healthy_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(parse_color(&theme.form.error_fg))
            };
            Line::from(vec![
                Span::styled(format!(" {:<22}", row.label), Style::default().fg(label_fg)),
                Span::styled(row.value, value_style),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(card_block("Server status", theme)),
        area,
    );
}

fn render_recent_events(f: &mut Frame, area: Rect, events: &[LogEntry], theme: &Theme) {
    let lines: Vec<Line> = events
        .iter()
        .map(|entry| super::logs::log_line(entry, theme))
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(card_block("Recent events", theme)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_util::render_to_string;

    #[test]
    fn shows_stats_status_and_events() {
        let text = render_to_string(140, 20, |f| render_overview(f, f.area(), &Theme::default()));
        assert!(text.contains("12,847"));
        assert!(text.contains("234"));
        assert!(text.contains("45.2 GB"));
        assert!(text.contains("156"));
        assert!(text.contains("99.8%"));
        assert!(text.contains("Connected"));
        assert!(text.contains("15:42:23"));
        assert!(text.contains("15:38:45"));
    }
}
