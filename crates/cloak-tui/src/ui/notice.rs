//! Toast in the top-right corner for the current notice.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};
use cloak_core::Notice;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// The toast area: top-right corner, clipped to `area`.
fn toast_rect(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect::new(area.right() - width, area.top(), width, height)
}

pub fn render_notice(f: &mut Frame, notice: &Notice, theme: &Theme) {
    let area = toast_rect(f.area());
    let color = if notice.is_destructive() {
        parse_color(&theme.notice.destructive_fg)
    } else {
        parse_color(&theme.notice.normal_fg)
    };

    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            notice.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(notice.description.clone()),
    ];
    let toast = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(toast, area);
}
