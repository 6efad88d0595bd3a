//! Transient user-facing notifications.
//!
//! A [`Notice`] is what the frontend shows as a toast after login, a failed
//! login, or a save. The core only decides the wording and severity; how
//! long it stays visible is up to the frontend.

/// How a notice should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn login_succeeded() -> Self {
        Self::new("Signed in", "Welcome to the admin panel", Severity::Normal)
    }

    /// Shown for any rejected login. Never says which credential was wrong.
    pub fn login_failed() -> Self {
        Self::new(
            "Sign-in failed",
            "Check your username and password",
            Severity::Destructive,
        )
    }

    /// Shown when the credentials were accepted but the session could not be stored.
    pub fn session_unavailable() -> Self {
        Self::new(
            "Sign-in failed",
            "The session could not be saved",
            Severity::Destructive,
        )
    }

    pub fn settings_saved() -> Self {
        Self::new(
            "Settings saved",
            "Configuration updated successfully",
            Severity::Normal,
        )
    }

    pub fn token_saved() -> Self {
        Self::new("Token saved", "Storage API token updated", Severity::Normal)
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}
