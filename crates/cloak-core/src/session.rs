//! The session gate.
//!
//! Decides whether the console shows the login form or the dashboard. The
//! gate is authenticated exactly when it holds a [`Token`]; a token is minted
//! on a successful login, persisted under [`TOKEN_KEY`], restored from the
//! store at startup, and deleted on logout.
//!
//! Token validity is presence-only: a restored token is trusted as-is, with
//! no expiry or signature check. Anything that writes a value under
//! [`TOKEN_KEY`] in the store is treated as logged in.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, CoreResult};
use crate::identity::{Identity, IdentityVerifier};
use crate::storage::KeyValueStore;

/// Store key holding the session token.
pub const TOKEN_KEY: &str = "admin_token";

const TOKEN_PREFIX: &str = "superuser_token_";

/// Opaque session token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Mints a timestamp-derived token. Distinct across calls in practice,
    /// not guaranteed unique.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self(format!("{TOKEN_PREFIX}{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Tokens are bearer secrets; keep them out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} chars>)", self.0.len())
    }
}

/// Which side of the gate the viewer is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Token),
}

/// Owns the token store and the credential check.
pub struct SessionGate {
    store: Box<dyn KeyValueStore>,
    verifier: Box<dyn IdentityVerifier>,
    state: SessionState,
    identity: Option<Identity>,
}

impl SessionGate {
    /// Creates a gate in the unauthenticated state. Call
    /// [`restore_session`](Self::restore_session) to pick up a stored token.
    pub fn new(store: Box<dyn KeyValueStore>, verifier: Box<dyn IdentityVerifier>) -> Self {
        Self {
            store,
            verifier,
            state: SessionState::Unauthenticated,
            identity: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The identity that logged in during this process, if any. A restored
    /// session has a token but no identity, since nothing was verified.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Reads the persisted token and, if one is present, moves to
    /// [`SessionState::Authenticated`] without checking it.
    ///
    /// An unreadable store is logged and treated as "no token".
    pub fn restore_session(&mut self) -> Option<Token> {
        match self.store.get(TOKEN_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => {
                let token = Token::from(raw);
                tracing::info!("Session restored from store");
                self.state = SessionState::Authenticated(token.clone());
                Some(token)
            }
            Ok(_) => {
                tracing::debug!("No stored session");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read stored session: {e}");
                None
            }
        }
    }

    /// Checks the credentials and, on success, persists a fresh token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] when the verifier rejects the pair.
    ///   Nothing is written to the store and the state is unchanged.
    /// - [`AuthError::Storage`] when the token could not be persisted. The
    ///   gate stays unauthenticated.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<Token, AuthError> {
        let identity = match self.verifier.verify(username, password) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("Failed login attempt");
                return Err(e);
            }
        };

        let token = Token::generate();
        self.store.set(TOKEN_KEY, token.as_str())?;

        tracing::info!("Login succeeded for user: {}", identity.username);
        self.state = SessionState::Authenticated(token.clone());
        self.identity = Some(identity);
        Ok(token)
    }

    /// Deletes the persisted token and moves to
    /// [`SessionState::Unauthenticated`].
    ///
    /// The in-memory transition always happens; the returned error only
    /// reports that the stored token could not be removed.
    pub fn logout(&mut self) -> CoreResult<()> {
        self.state = SessionState::Unauthenticated;
        self.identity = None;
        let result = self.store.remove(TOKEN_KEY);
        match &result {
            Ok(()) => tracing::info!("Logged out"),
            Err(e) => tracing::warn!("Logged out, but failed to clear stored token: {e}"),
        }
        result
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("state", &self.state)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
