//! Error types for `cloak-core`.
//!
//! Storage and configuration failures surface as [`CoreError`] through the
//! [`CoreResult<T>`] alias. The two user-facing failures of the console have
//! their own types: [`AuthError`] for a rejected login and
//! [`ValidationError`] for a settings input that does not parse.

use std::path::PathBuf;

/// Unified error type for storage and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The key-value store file exists but is not a JSON object of strings.
    #[error("corrupt store {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `cloak-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Why a login attempt did not produce a session.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username or password did not match. Deliberately does not say which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The credentials were accepted but the token could not be persisted.
    #[error("session storage failed: {0}")]
    Storage(#[from] CoreError),
}

/// A settings field received input it cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {field}: {reason}")]
pub struct ValidationError {
    /// Display name of the field that rejected the input.
    pub field: &'static str,
    /// The raw input as typed.
    pub input: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, input: &str, reason: impl Into<String>) -> Self {
        Self {
            field,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/config.toml"));
        assert_eq!(err.to_string(), "path not found: /missing/config.toml");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn corrupt_store_displays_path_and_reason() {
        let err = CoreError::CorruptStore {
            path: PathBuf::from("/tmp/storage.json"),
            reason: "expected an object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt store /tmp/storage.json: expected an object"
        );
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("disk gone"));
    }

    #[test]
    fn invalid_credentials_does_not_name_a_field() {
        let msg = AuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "invalid credentials");
        assert!(!msg.contains("username"));
        assert!(!msg.contains("password"));
    }

    #[test]
    fn auth_error_wraps_storage_failure() {
        let err: AuthError = CoreError::ConfigParse("x".to_string()).into();
        assert!(matches!(err, AuthError::Storage(_)));
    }

    #[test]
    fn validation_error_displays_field_and_reason() {
        let err = ValidationError::new("rate limit", "abc", "not a whole number");
        assert_eq!(err.to_string(), "invalid value for rate limit: not a whole number");
        assert_eq!(err.input, "abc");
    }
}
