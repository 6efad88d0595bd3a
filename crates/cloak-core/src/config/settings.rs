//! Application configuration loaded from a TOML file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::identity::{
    HashedVerifier, IdentityVerifier, StaticVerifier, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};
use crate::settings::ProtectionSettings;

/// Top-level configuration.
///
/// All fields have defaults so the console works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Initial values for every new session's protection settings.
    #[serde(default)]
    pub protection: ProtectionSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Who may log in.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    /// Argon2 PHC string. When set, `password` is ignored.
    #[serde(default)]
    pub password_hash: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            password_hash: None,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl AuthConfig {
    /// Builds the credential check this section describes.
    ///
    /// # Errors
    ///
    /// [`CoreError::ConfigParse`] if `password_hash` is set but malformed.
    pub fn verifier(&self) -> CoreResult<Box<dyn IdentityVerifier>> {
        match self.password_hash.as_deref().filter(|h| !h.is_empty()) {
            Some(hash) => Ok(Box::new(HashedVerifier::new(self.username.clone(), hash)?)),
            None => Ok(Box::new(StaticVerifier::new(
                self.username.clone(),
                self.password.clone(),
            ))),
        }
    }
}

/// Where the session token lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file. Defaults to `storage.json` in the config directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| config_dir.join("storage.json"))
    }
}

/// Timing of the interactive frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notice stays on screen.
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    /// Artificial delay between submitting the login form and the check.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_seconds: default_notice_seconds(),
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

fn default_notice_seconds() -> u64 {
    3
}

fn default_login_delay_ms() -> u64 {
    600
}
