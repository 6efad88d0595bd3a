//! Storage tab: API token field and the file list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};
use cloak_core::dashboard::STORAGE_FILES;

use super::mask;

/// Edit-mode state of the API token field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFormState {
    pub buffer: String,
}

impl TokenFormState {
    pub fn new(current: &str) -> Self {
        Self {
            buffer: current.to_string(),
        }
    }
}

/// Renders the token card above the file list. `form` is `Some` while editing.
pub fn render_storage(
    f: &mut Frame,
    area: Rect,
    api_token: &str,
    form: Option<&TokenFormState>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    let border = Style::default().fg(parse_color(&theme.card.border_fg));
    let label_fg = parse_color(&theme.form.label_fg);
    let hint_fg = parse_color(&theme.statusbar.hint_fg);

    let (value, value_style) = match form {
        Some(state) => (
            format!("{}_", mask(&state.buffer)),
            Style::default()
                .fg(parse_color(&theme.form.focused_fg))
                .add_modifier(Modifier::BOLD),
        ),
        None if api_token.is_empty() => (
            "(not set)".to_string(),
            Style::default().fg(hint_fg),
        ),
        None => (
            mask(api_token),
            Style::default().fg(parse_color(&theme.card.value_fg)),
        ),
    };

    let hint = if form.is_some() {
        "  Enter: save | Esc: cancel"
    } else {
        "  e: edit token"
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Google API token: ", Style::default().fg(label_fg)),
            Span::styled(value, value_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(hint_fg))),
    ];

    let token_card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Storage management ")
            .border_style(border),
    );
    f.render_widget(token_card, chunks[0]);

    let items: Vec<ListItem> = STORAGE_FILES
        .iter()
        .map(|name| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {name:<30}"),
                    Style::default().fg(parse_color(&theme.card.value_fg)),
                ),
                Span::styled("[download] [delete]", Style::default().fg(hint_fg)),
            ]))
        })
        .collect();

    let files = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Files in storage ")
            .border_style(border),
    );
    f.render_widget(files, chunks[1]);
}
