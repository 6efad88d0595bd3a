//! Settings tab: the protection (cloak) form.
//!
//! Out of edit mode the tab shows the current values read-only. In edit
//! mode one row has focus; numeric rows edit a text buffer that is applied
//! on Enter or when focus moves, and a rejected value leaves the settings
//! untouched and shows the reason under the row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};
use cloak_core::{ProtectionSettings, SettingsField};

/// A focusable row of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Field(SettingsField),
    Save,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Field(SettingsField::Enabled),
        SettingsRow::Field(SettingsField::RateLimit),
        SettingsRow::Field(SettingsField::BlockDuration),
        SettingsRow::Save,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Advance to the next row (wrapping around).
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Go to the previous row (wrapping around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Rows whose value is typed rather than toggled.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Field(SettingsField::RateLimit) | Self::Field(SettingsField::BlockDuration)
        )
    }
}

/// Edit-mode state of the settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFormState {
    pub focused: SettingsRow,
    /// Text being typed into the focused numeric row.
    pub buffer: String,
    /// Why the last applied value was rejected.
    pub error: Option<String>,
}

impl SettingsFormState {
    /// Starts editing with focus on the first row.
    pub fn new(settings: &ProtectionSettings) -> Self {
        Self::focused_on(SettingsRow::ALL[0], settings)
    }

    /// Moves focus to `row`, loading its current value into the buffer.
    pub fn focused_on(row: SettingsRow, settings: &ProtectionSettings) -> Self {
        let buffer = match row {
            SettingsRow::Field(field) if row.is_numeric() => settings.display_value(field),
            _ => String::new(),
        };
        Self {
            focused: row,
            buffer,
            error: None,
        }
    }

    pub fn with_error(self, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..self
        }
    }
}

/// Renders the settings card. `form` is `Some` while editing.
pub fn render_settings(
    f: &mut Frame,
    area: Rect,
    settings: &ProtectionSettings,
    form: Option<&SettingsFormState>,
    theme: &Theme,
) {
    let label_fg = parse_color(&theme.form.label_fg);
    let focused_fg = parse_color(&theme.form.focused_fg);
    let error_fg = parse_color(&theme.form.error_fg);
    let value_fg = parse_color(&theme.card.value_fg);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in SettingsRow::ALL {
        let focused = form.is_some_and(|s| s.focused == row);
        let marker = if focused { "> " } else { "  " };

        let text = match row {
            SettingsRow::Field(field) => {
                let value = match form {
                    Some(state) if focused && row.is_numeric() => format!("{}_", state.buffer),
                    _ => settings.display_value(field),
                };
                format!("{marker}{:<26}{value}", field.label())
            }
            SettingsRow::Save => format!("{marker}[ Save settings ]"),
        };

        let style = if focused {
            Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
        } else if matches!(row, SettingsRow::Save) {
            Style::default().fg(label_fg)
        } else {
            Style::default().fg(value_fg)
        };
        lines.push(Line::from(Span::styled(text, style)));

        if let Some(state) = form.filter(|_| focused) {
            if let Some(ref err) = state.error {
                lines.push(Line::from(Span::styled(
                    format!("    {err}"),
                    Style::default().fg(error_fg),
                )));
            }
        }

        if row == SettingsRow::Field(SettingsField::Enabled) {
            lines.push(Line::from(Span::styled(
                "    Automatically block suspicious activity",
                Style::default().fg(label_fg),
            )));
        }
    }

    lines.push(Line::from(""));
    let hint = if form.is_some() {
        "  Tab/Up/Down: move | Space: toggle | Enter: apply | Esc: done"
    } else {
        "  e: edit"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(parse_color(&theme.statusbar.hint_fg)),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cloak settings ")
            .border_style(Style::default().fg(parse_color(&theme.card.border_fg))),
    );
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_util::render_to_string;

    #[test]
    fn row_next_cycles() {
        let mut row = SettingsRow::ALL[0];
        for expected in SettingsRow::ALL.iter().skip(1) {
            row = row.next();
            assert_eq!(row, *expected);
        }
        assert_eq!(row.next(), SettingsRow::ALL[0]);
    }

    #[test]
    fn row_prev_cycles() {
        assert_eq!(SettingsRow::ALL[0].prev(), SettingsRow::Save);
        assert_eq!(
            SettingsRow::Save.prev(),
            SettingsRow::Field(SettingsField::BlockDuration)
        );
    }

    #[test]
    fn only_counts_are_numeric() {
        assert!(!SettingsRow::Field(SettingsField::Enabled).is_numeric());
        assert!(SettingsRow::Field(SettingsField::RateLimit).is_numeric());
        assert!(SettingsRow::Field(SettingsField::BlockDuration).is_numeric());
        assert!(!SettingsRow::Save.is_numeric());
    }

    #[test]
    fn focusing_numeric_row_loads_current_value() {
        let settings = ProtectionSettings::default();
        let state =
            SettingsFormState::focused_on(SettingsRow::Field(SettingsField::RateLimit), &settings);
        assert_eq!(state.buffer, "1000");
        assert!(state.error.is_none());
    }

    #[test]
    fn focusing_toggle_row_has_empty_buffer() {
        let state = SettingsFormState::new(&ProtectionSettings::default());
        assert_eq!(state.focused, SettingsRow::Field(SettingsField::Enabled));
        assert!(state.buffer.is_empty());
    }

    #[test]
    fn renders_values_read_only() {
        let settings = ProtectionSettings::default();
        let text = render_to_string(80, 20, |f| {
            render_settings(f, f.area(), &settings, None, &Theme::default())
        });
        assert!(text.contains("Cloak settings"));
        assert!(text.contains("Requests per minute"));
        assert!(text.contains("1000"));
        assert!(text.contains("300"));
        assert!(text.contains("e: edit"));
    }

    #[test]
    fn renders_error_under_focused_row() {
        let settings = ProtectionSettings::default();
        let form = SettingsFormState {
            focused: SettingsRow::Field(SettingsField::RateLimit),
            buffer: "abc".to_string(),
            error: Some("invalid value for rate limit: not a whole number".to_string()),
        };
        let text = render_to_string(90, 20, |f| {
            render_settings(f, f.area(), &settings, Some(&form), &Theme::default())
        });
        assert!(text.contains("abc_"));
        assert!(text.contains("not a whole number"));
    }
}
