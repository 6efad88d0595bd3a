//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod login;
pub mod logs;
pub mod notice;
pub mod overview;
pub mod placeholder;
pub mod settings_form;
pub mod statusbar;
pub mod storage;
pub mod tab_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculates a centered rectangle of the given percentage size within the parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Masks a secret for display, one `*` per character.
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
