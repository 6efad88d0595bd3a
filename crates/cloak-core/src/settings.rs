//! Per-session settings edited on the dashboard.
//!
//! [`ProtectionSettings`] holds the cloak (DDoS protection) parameters and
//! [`SettingsState`] adds the pending storage API token. Both are plain
//! values: every update returns a new record and leaves the original alone.
//!
//! Saving is a stub. [`ProtectionSettings::save`] and
//! [`SettingsState::save_api_token`] return an [`Ack`] for the frontend to
//! display and do nothing else: no persistence, no enforcement.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::notice::Notice;

/// Cloak parameters. Not enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Requests per minute before a client is blocked.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
    #[serde(default = "default_block_duration_secs")]
    pub block_duration_secs: u32,
}

impl Default for ProtectionSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            rate_limit: default_rate_limit(),
            block_duration_secs: default_block_duration_secs(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_rate_limit() -> u32 {
    1000
}

fn default_block_duration_secs() -> u32 {
    300
}

/// An editable field of [`ProtectionSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Enabled,
    RateLimit,
    BlockDuration,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [Self::Enabled, Self::RateLimit, Self::BlockDuration];

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "DDoS protection",
            Self::RateLimit => "Requests per minute",
            Self::BlockDuration => "Block duration (seconds)",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::RateLimit => "rate limit",
            Self::BlockDuration => "block duration",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingsField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "rateLimit" | "rate_limit" => Ok(Self::RateLimit),
            "blockDuration" | "blockDurationSeconds" | "block_duration" | "block_duration_secs" => {
                Ok(Self::BlockDuration)
            }
            other => Err(ValidationError::new("field", other, "unknown settings field")),
        }
    }
}

/// Confirmation returned by a save. Carries the notice to show.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Ack {
    notice: Notice,
}

impl Ack {
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn into_notice(self) -> Notice {
        self.notice
    }
}

impl ProtectionSettings {
    /// Returns a copy with `field` replaced by the parsed `value`.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] if `value` does not parse for the field. Numeric
    /// fields take a non-negative whole number (surrounding whitespace is
    /// ignored); the flag takes `true/false`, `on/off`, `yes/no` or `1/0`.
    pub fn update_field(&self, field: SettingsField, value: &str) -> Result<Self, ValidationError> {
        let updated = match field {
            SettingsField::Enabled => Self {
                enabled: parse_flag(field, value)?,
                ..*self
            },
            SettingsField::RateLimit => Self {
                rate_limit: parse_count(field, value)?,
                ..*self
            },
            SettingsField::BlockDuration => Self {
                block_duration_secs: parse_count(field, value)?,
                ..*self
            },
        };
        Ok(updated)
    }

    /// Same as [`update_field`](Self::update_field) with the field given by name
    /// (`enabled`, `rateLimit`, `blockDuration`, ...).
    pub fn update_named(&self, field: &str, value: &str) -> Result<Self, ValidationError> {
        self.update_field(field.parse()?, value)
    }

    /// Returns a copy with the flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            enabled: !self.enabled,
            ..*self
        }
    }

    /// Current value of `field` as it would be typed.
    pub fn display_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Enabled => if self.enabled { "on" } else { "off" }.to_string(),
            SettingsField::RateLimit => self.rate_limit.to_string(),
            SettingsField::BlockDuration => self.block_duration_secs.to_string(),
        }
    }

    /// Acknowledges a save. Persists nothing.
    pub fn save(&self) -> Ack {
        tracing::info!(
            "Protection settings saved (not persisted): enabled={}, rate_limit={}, block_duration_secs={}",
            self.enabled,
            self.rate_limit,
            self.block_duration_secs
        );
        Ack {
            notice: Notice::settings_saved(),
        }
    }
}

fn parse_count(field: SettingsField, value: &str) -> Result<u32, ValidationError> {
    let trimmed = value.trim();
    trimmed.parse::<u32>().map_err(|e| {
        let reason = match e.kind() {
            IntErrorKind::Empty => "a value is required",
            IntErrorKind::PosOverflow => "value is too large",
            _ if trimmed.starts_with('-') => "must not be negative",
            _ => "not a whole number",
        };
        ValidationError::new(field.name(), value, reason)
    })
}

fn parse_flag(field: SettingsField, value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ValidationError::new(field.name(), value, "expected on or off")),
    }
}

/// Everything the dashboard lets the user edit during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub protection: ProtectionSettings,
    /// Storage API token as typed. Never persisted.
    pub api_token: String,
}

impl SettingsState {
    pub fn new(protection: ProtectionSettings) -> Self {
        Self {
            protection,
            api_token: String::new(),
        }
    }

    pub fn with_protection(self, protection: ProtectionSettings) -> Self {
        Self { protection, ..self }
    }

    pub fn with_api_token(self, api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..self
        }
    }

    /// Acknowledges saving the storage token. Persists nothing.
    pub fn save_api_token(&self) -> Ack {
        tracing::info!(
            "Storage API token saved (not persisted): {} chars",
            self.api_token.chars().count()
        );
        Ack {
            notice: Notice::token_saved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProtectionSettings {
        ProtectionSettings {
            enabled: true,
            rate_limit: 1000,
            block_duration_secs: 300,
        }
    }

    #[test]
    fn defaults_match_console_defaults() {
        assert_eq!(ProtectionSettings::default(), base());
    }

    #[test]
    fn field_labels() {
        let labels: Vec<_> = SettingsField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "DDoS protection",
                "Requests per minute",
                "Block duration (seconds)"
            ]
        );
    }

    // --- update_field ---

    #[test]
    fn update_rate_limit() {
        let updated = base().update_named("rateLimit", "500").unwrap();
        assert_eq!(
            updated,
            ProtectionSettings {
                enabled: true,
                rate_limit: 500,
                block_duration_secs: 300,
            }
        );
    }

    #[test]
    fn update_block_duration() {
        let updated = base().update_field(SettingsField::BlockDuration, "60").unwrap();
        assert_eq!(updated.block_duration_secs, 60);
        assert_eq!(updated.rate_limit, 1000);
    }

    #[test]
    fn update_enabled_flag() {
        let updated = base().update_field(SettingsField::Enabled, "off").unwrap();
        assert!(!updated.enabled);
        let updated = updated.update_field(SettingsField::Enabled, "TRUE").unwrap();
        assert!(updated.enabled);
    }

    #[test]
    fn update_is_pure() {
        let original = base();
        let a = original.update_named("rateLimit", "500").unwrap();
        let b = original.update_named("rateLimit", "500").unwrap();
        assert_eq!(a, b);
        assert_eq!(original, base());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let updated = base().update_field(SettingsField::RateLimit, " 42 ").unwrap();
        assert_eq!(updated.rate_limit, 42);
    }

    #[test]
    fn zero_is_allowed() {
        let updated = base().update_field(SettingsField::RateLimit, "0").unwrap();
        assert_eq!(updated.rate_limit, 0);
    }

    #[test]
    fn non_numeric_rejected() {
        let err = base().update_field(SettingsField::RateLimit, "abc").unwrap_err();
        assert_eq!(err.field, "rate limit");
        assert_eq!(err.input, "abc");
        assert_eq!(err.reason, "not a whole number");
    }

    #[test]
    fn empty_rejected() {
        let err = base().update_field(SettingsField::BlockDuration, "").unwrap_err();
        assert_eq!(err.reason, "a value is required");
    }

    #[test]
    fn negative_rejected() {
        let err = base().update_field(SettingsField::RateLimit, "-5").unwrap_err();
        assert_eq!(err.reason, "must not be negative");
    }

    #[test]
    fn overflow_rejected() {
        let err = base()
            .update_field(SettingsField::RateLimit, "99999999999")
            .unwrap_err();
        assert_eq!(err.reason, "value is too large");
    }

    #[test]
    fn fractional_rejected() {
        assert!(base().update_field(SettingsField::RateLimit, "1.5").is_err());
    }

    #[test]
    fn bad_flag_rejected() {
        let err = base().update_field(SettingsField::Enabled, "maybe").unwrap_err();
        assert_eq!(err.field, "enabled");
    }

    #[test]
    fn unknown_field_name_rejected() {
        let err = base().update_named("burstSize", "10").unwrap_err();
        assert_eq!(err.reason, "unknown settings field");
    }

    #[test]
    fn field_name_aliases() {
        assert_eq!("rate_limit".parse::<SettingsField>().unwrap(), SettingsField::RateLimit);
        assert_eq!(
            "blockDurationSeconds".parse::<SettingsField>().unwrap(),
            SettingsField::BlockDuration
        );
        assert_eq!("enabled".parse::<SettingsField>().unwrap(), SettingsField::Enabled);
    }

    #[test]
    fn toggled_flips_only_enabled() {
        let toggled = base().toggled();
        assert!(!toggled.enabled);
        assert_eq!(toggled.rate_limit, 1000);
        assert_eq!(toggled.toggled(), base());
    }

    #[test]
    fn display_values() {
        let s = base();
        assert_eq!(s.display_value(SettingsField::Enabled), "on");
        assert_eq!(s.display_value(SettingsField::RateLimit), "1000");
        assert_eq!(s.display_value(SettingsField::BlockDuration), "300");
    }

    // --- save ---

    #[test]
    fn save_does_not_alter_settings() {
        let settings = base().update_named("rateLimit", "10").unwrap();
        let before = settings;
        let ack = settings.save();
        assert_eq!(settings, before);
        assert_eq!(ack.notice(), &Notice::settings_saved());
    }

    // --- SettingsState ---

    #[test]
    fn settings_state_starts_with_empty_token() {
        let state = SettingsState::new(base());
        assert!(state.api_token.is_empty());
        assert_eq!(state.protection, base());
    }

    #[test]
    fn with_api_token_replaces_token_only() {
        let state = SettingsState::new(base()).with_api_token("abc");
        assert_eq!(state.api_token, "abc");
        assert_eq!(state.protection, base());
    }

    #[test]
    fn save_api_token_keeps_state() {
        let state = SettingsState::default().with_api_token("abc");
        let ack = state.save_api_token();
        assert_eq!(state.api_token, "abc");
        assert!(!ack.notice().is_destructive());
    }

    #[test]
    fn deserializes_partial_toml() {
        let settings: ProtectionSettings = toml::from_str("rate_limit = 20").unwrap();
        assert_eq!(settings.rate_limit, 20);
        assert!(settings.enabled);
        assert_eq!(settings.block_duration_secs, 300);
    }
}
