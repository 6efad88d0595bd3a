//! Cloak admin core library. Session and settings logic with no UI.
//!
//! `cloak-core` holds everything the admin console decides: who may log in,
//! whether a session exists, what the protection settings are, and what the
//! dashboard shows. It knows nothing about terminals so the TUI
//! (`cloak-tui`) stays a thin rendering layer over these types.
//!
//! # Modules
//!
//! - [`session`]: the login gate ([`SessionGate`]) and its persisted [`Token`].
//! - [`identity`]: credential checks ([`StaticVerifier`], [`HashedVerifier`]).
//! - [`storage`]: the [`KeyValueStore`] seam with file and in-memory backends.
//! - [`settings`]: protection settings and the storage API token form.
//! - [`notice`]: toast wording for login and save outcomes.
//! - [`dashboard`]: the fixed statistics, log lines and file names on display.
//! - [`config`]: TOML configuration and color theme.
//! - [`error`]: [`CoreError`], [`AuthError`] and [`ValidationError`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod notice;
pub mod session;
pub mod settings;
pub mod storage;

pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use error::{AuthError, CoreError, CoreResult, ValidationError};
pub use identity::{hash_password, HashedVerifier, Identity, IdentityVerifier, StaticVerifier};
pub use notice::{Notice, Severity};
pub use session::{SessionGate, SessionState, Token, TOKEN_KEY};
pub use settings::{Ack, ProtectionSettings, SettingsField, SettingsState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
