//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the dashboard and
//! shows who is signed in followed by the key hints for the current mode.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};

use crate::app::AppMode;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub mode: AppMode,
    /// Username verified in this process. `None` for a restored session.
    pub username: Option<&'a str>,
}

fn key_hints(mode: AppMode) -> &'static str {
    match mode {
        AppMode::EditSettings => "Tab: next | Space: toggle | Enter: apply | Esc: done",
        AppMode::EditToken => "Enter: save | Esc: cancel",
        _ => "Tab/1-6: switch | e: edit | o: logout | q: quit",
    }
}

pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let fg = parse_color(&theme.statusbar.fg);

    let who = match props.username {
        Some(name) => format!(" {name} "),
        None => " session restored ".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            who,
            Style::default()
                .fg(parse_color(&theme.statusbar.user_fg))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", key_hints(props.mode)), Style::default().fg(fg).bg(bg)),
    ]);

    f.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
