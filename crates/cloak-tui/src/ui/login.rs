//! Login screen.
//!
//! A centered form with username and password fields. While a submission is
//! pending the form shows a spinner and ignores input.

use std::time::Instant;

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use cloak_core::config::theme::{parse_color, Theme};

use super::{centered_rect, mask};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Which field in the login form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    /// The other field. Two fields, so next and previous coincide.
    pub fn toggle(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

/// State of the login form.
#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focused: LoginField,
    /// Inline hint under the fields, e.g. for a missing value.
    pub hint: Option<String>,
    /// Set while the artificial login delay runs.
    pub pending_since: Option<Instant>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focused: LoginField::Username,
            hint: None,
            pending_since: None,
        }
    }
}

impl LoginFormState {
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Returns a mutable reference to the string of the currently focused field.
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Both fields are required. Returns the first empty one, if any.
    pub fn missing_field(&self) -> Option<LoginField> {
        if self.username.is_empty() {
            Some(LoginField::Username)
        } else if self.password.is_empty() {
            Some(LoginField::Password)
        } else {
            None
        }
    }

    fn display_value(&self, field: LoginField) -> String {
        match field {
            LoginField::Username => self.username.clone(),
            LoginField::Password => mask(&self.password),
        }
    }
}

/// Renders the login form as a centered card.
pub fn render_login(f: &mut Frame, state: &LoginFormState, theme: &Theme) {
    let area = centered_rect(50, 50, f.area());
    let border_fg = parse_color(&theme.form.border_fg);
    let label_fg = parse_color(&theme.form.label_fg);
    let focused_fg = parse_color(&theme.form.focused_fg);

    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Superuser sign-in",
            Style::default().fg(label_fg),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for field in [LoginField::Username, LoginField::Password] {
        let focused = field == state.focused && !state.is_pending();
        let marker = if focused { "> " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let style = if focused {
            Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(label_fg)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{marker}{}: {}{cursor}",
                field.label(),
                state.display_value(field)
            ),
            style,
        )));
    }

    lines.push(Line::from(""));

    match state.pending_since {
        Some(since) => {
            let frame = (since.elapsed().as_millis() / 100) as usize % SPINNER.len();
            lines.push(Line::from(Span::styled(
                format!("  {} Signing in...", SPINNER[frame]),
                Style::default()
                    .fg(focused_fg)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        None => {
            if let Some(ref hint) = state.hint {
                lines.push(Line::from(Span::styled(
                    format!("  {hint}"),
                    Style::default().fg(parse_color(&theme.form.error_fg)),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: next field | Enter: sign in | Esc: quit",
        Style::default().fg(parse_color(&theme.statusbar.hint_fg)),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Admin Panel ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(form, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_util::render_to_string;

    #[test]
    fn login_field_toggle_cycles() {
        assert_eq!(LoginField::Username.toggle(), LoginField::Password);
        assert_eq!(LoginField::Password.toggle(), LoginField::Username);
    }

    #[test]
    fn default_form_state() {
        let state = LoginFormState::default();
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert_eq!(state.focused, LoginField::Username);
        assert!(state.hint.is_none());
        assert!(!state.is_pending());
    }

    #[test]
    fn focused_value_mut_edits_focused_field() {
        let mut state = LoginFormState::default();
        state.focused_value_mut().push('a');
        state.focused = LoginField::Password;
        state.focused_value_mut().push('b');
        assert_eq!(state.username, "a");
        assert_eq!(state.password, "b");
    }

    #[test]
    fn missing_field_reports_first_empty() {
        let mut state = LoginFormState::default();
        assert_eq!(state.missing_field(), Some(LoginField::Username));
        state.username = "u".to_string();
        assert_eq!(state.missing_field(), Some(LoginField::Password));
        state.password = "p".to_string();
        assert_eq!(state.missing_field(), None);
    }

    #[test]
    fn password_is_masked() {
        let state = LoginFormState {
            password: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(state.display_value(LoginField::Password), "******");
    }

    #[test]
    fn rendered_form_hides_password() {
        let state = LoginFormState {
            username: "_superuser".to_string(),
            password: "admin123".to_string(),
            ..Default::default()
        };
        let text = render_to_string(80, 24, |f| render_login(f, &state, &Theme::default()));
        assert!(text.contains("Admin Panel"));
        assert!(text.contains("_superuser"));
        assert!(text.contains("********"));
        assert!(!text.contains("admin123"));
    }

    #[test]
    fn pending_form_shows_spinner_not_hint() {
        let state = LoginFormState {
            username: "u".to_string(),
            password: "p".to_string(),
            hint: Some("Enter a password".to_string()),
            pending_since: Some(Instant::now()),
            ..Default::default()
        };
        let text = render_to_string(80, 24, |f| render_login(f, &state, &Theme::default()));
        assert!(text.contains("Signing in..."));
        assert!(!text.contains("Enter a password"));
    }
}
