//! Header and tab strip at the top of the dashboard.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cloak_core::config::theme::{parse_color, Theme};

use crate::app::DashboardTab;

/// Renders the title line.
pub fn render_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " Admin Panel ",
            Style::default()
                .fg(parse_color(&theme.tabs.active_bg))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Storage & Cloak Control Center",
            Style::default().fg(parse_color(&theme.statusbar.hint_fg)),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Renders one label per tab, numbered for the jump keys.
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: DashboardTab, theme: &Theme) {
    let active_fg = parse_color(&theme.tabs.active_fg);
    let active_bg = parse_color(&theme.tabs.active_bg);
    let inactive_fg = parse_color(&theme.tabs.inactive_fg);

    let mut spans: Vec<Span> = Vec::new();
    for (i, tab) in DashboardTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {} {} ", i + 1, tab.label());
        if *tab == active {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(active_fg)
                    .bg(active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(inactive_fg)));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
