//! Console color theme.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`]. Every
//! group and every field inside a group may be omitted.

use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::dashboard::LogSeverity;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub tabs: TabsTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub card: CardTheme,
    #[serde(default)]
    pub form: FormTheme,
    #[serde(default)]
    pub notice: NoticeTheme,
    #[serde(default)]
    pub log: LogTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Tab bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsTheme {
    pub active_fg: String,
    pub active_bg: String,
    pub inactive_fg: String,
}

impl Default for TabsTheme {
    fn default() -> Self {
        Self {
            active_fg: "black".to_string(),
            active_bg: "cyan".to_string(),
            inactive_fg: "gray".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub bg: String,
    pub fg: String,
    pub user_fg: String,
    pub hint_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            fg: "black".to_string(),
            user_fg: "blue".to_string(),
            hint_fg: "dark_gray".to_string(),
        }
    }
}

/// Dashboard card colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTheme {
    pub border_fg: String,
    pub title_fg: String,
    pub value_fg: String,
    pub healthy_fg: String,
    pub gauge_fg: String,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            title_fg: "gray".to_string(),
            value_fg: "white".to_string(),
            healthy_fg: "green".to_string(),
            gauge_fg: "cyan".to_string(),
        }
    }
}

/// Login and settings form colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTheme {
    pub border_fg: String,
    pub label_fg: String,
    pub focused_fg: String,
    pub error_fg: String,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
            label_fg: "gray".to_string(),
            focused_fg: "yellow".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Toast colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeTheme {
    pub normal_fg: String,
    pub destructive_fg: String,
}

impl Default for NoticeTheme {
    fn default() -> Self {
        Self {
            normal_fg: "green".to_string(),
            destructive_fg: "red".to_string(),
        }
    }
}

/// Log badge colors by severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogTheme {
    pub info_fg: String,
    pub warning_fg: String,
    pub success_fg: String,
    pub error_fg: String,
}

impl LogTheme {
    pub fn color_for(&self, severity: LogSeverity) -> Color {
        let name = match severity {
            LogSeverity::Info => &self.info_fg,
            LogSeverity::Warning => &self.warning_fg,
            LogSeverity::Success => &self.success_fg,
            LogSeverity::Error => &self.error_fg,
        };
        parse_color(name)
    }
}

impl Default for LogTheme {
    fn default() -> Self {
        Self {
            info_fg: "blue".to_string(),
            warning_fg: "yellow".to_string(),
            success_fg: "green".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Parses a color string into a [`Color`].
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for anything else.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        hex if hex.starts_with('#') && hex.len() == 7 => parse_hex(&hex[1..]).unwrap_or(Color::Reset),
        _ => Color::Reset,
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_theme_tabs() {
        let theme = Theme::default();
        assert_eq!(theme.tabs.active_bg, "cyan");
        assert_eq!(theme.tabs.inactive_fg, "gray");
    }

    #[test]
    fn default_theme_notice() {
        let theme = Theme::default();
        assert_eq!(theme.notice.normal_fg, "green");
        assert_eq!(theme.notice.destructive_fg, "red");
    }

    #[test]
    fn log_colors_by_severity() {
        let log = LogTheme::default();
        assert_eq!(log.color_for(LogSeverity::Info), Color::Blue);
        assert_eq!(log.color_for(LogSeverity::Warning), Color::Yellow);
        assert_eq!(log.color_for(LogSeverity::Success), Color::Green);
        assert_eq!(log.color_for(LogSeverity::Error), Color::Red);
    }

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("dark_gray"), Color::DarkGray);
        assert_eq!(parse_color("light_cyan"), Color::LightCyan);
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("DarkGray"), Color::DarkGray);
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
        assert_eq!(parse_color("#00FF00"), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn parse_color_unknown_returns_reset() {
        assert_eq!(parse_color("nonexistent"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("#fff"), Color::Reset);
    }

    #[test]
    fn load_partial_theme_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(
            &path,
            r##"
[tabs]
active_bg = "#112233"

[log]
error_fg = "magenta"
"##,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.tabs.active_bg, "#112233");
        assert_eq!(theme.tabs.active_fg, "black");
        assert_eq!(theme.log.error_fg, "magenta");
        assert_eq!(theme.log.info_fg, "blue");
        assert_eq!(theme.statusbar.bg, "white");
    }

    #[test]
    fn load_missing_theme_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Theme::load(&tmp.path().join("theme.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_theme_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(&path, "[tabs\nactive_bg =").unwrap();
        assert!(matches!(
            Theme::load(&path).unwrap_err(),
            CoreError::ConfigParse(_)
        ));
    }
}
