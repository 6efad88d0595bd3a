//! Console configuration.
//!
//! Behavior ([`settings::Config`]) and colors ([`theme::Theme`]) are stored
//! as separate TOML files and loaded at startup. Both default every field.

pub mod settings;
pub mod theme;
