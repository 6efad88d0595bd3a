//! Credential verification.
//!
//! The session gate asks an [`IdentityVerifier`] whether a username/password
//! pair is acceptable. [`StaticVerifier`] compares against one literal pair;
//! [`HashedVerifier`] checks the password against an Argon2 PHC string so the
//! secret does not need to sit in the config in plain text.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AuthError, CoreError, CoreResult};

/// Username accepted by [`StaticVerifier::superuser`].
pub const DEFAULT_USERNAME: &str = "_superuser";
/// Password accepted by [`StaticVerifier::superuser`].
pub const DEFAULT_PASSWORD: &str = "admin123";

/// The principal a successful verification vouches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

/// Decides whether a credential pair is valid.
///
/// Implementations must return [`AuthError::InvalidCredentials`] for every
/// rejection without distinguishing a bad username from a bad password.
pub trait IdentityVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Accepts exactly one literal username/password pair.
#[derive(Clone)]
pub struct StaticVerifier {
    username: String,
    password: String,
}

impl StaticVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The built-in `_superuser` / `admin123` pair.
    pub fn superuser() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for StaticVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticVerifier")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl IdentityVerifier for StaticVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        // Evaluate both comparisons so timing does not reveal which one failed.
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        if user_ok & pass_ok {
            Ok(Identity {
                username: username.to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Accepts one username whose password matches an Argon2 hash.
#[derive(Debug, Clone)]
pub struct HashedVerifier {
    username: String,
    password_hash: String,
}

impl HashedVerifier {
    /// # Errors
    ///
    /// [`CoreError::ConfigParse`] if `password_hash` is not a valid PHC string.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> CoreResult<Self> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash)
            .map_err(|e| CoreError::ConfigParse(format!("invalid password hash: {e}")))?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }
}

impl IdentityVerifier for HashedVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::error!("Stored password hash became unparsable: {e}");
                false
            }
        };
        if user_ok && pass_ok {
            Ok(Identity {
                username: username.to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Produces an Argon2id PHC string for `password` with a random salt.
pub fn hash_password(password: &str) -> CoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CoreError::ConfigParse(format!("failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_accepts_literal_pair() {
        let v = StaticVerifier::superuser();
        let identity = v.verify("_superuser", "admin123").unwrap();
        assert_eq!(identity.username, "_superuser");
    }

    #[test]
    fn wrong_password_rejected() {
        let v = StaticVerifier::superuser();
        assert!(matches!(
            v.verify("_superuser", "admin124"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn wrong_username_rejected() {
        let v = StaticVerifier::superuser();
        assert!(matches!(
            v.verify("superuser", "admin123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn comparison_is_exact() {
        let v = StaticVerifier::superuser();
        for (u, p) in [
            ("", ""),
            ("_superuser ", "admin123"),
            ("_SUPERUSER", "admin123"),
            ("_superuser", "admin123 "),
            ("_superuser", "ADMIN123"),
            ("admin123", "_superuser"),
        ] {
            assert!(v.verify(u, p).is_err(), "accepted {u:?}/{p:?}");
        }
    }

    #[test]
    fn custom_static_pair() {
        let v = StaticVerifier::new("ops", "hunter2");
        assert!(v.verify("ops", "hunter2").is_ok());
        assert!(v.verify("_superuser", "admin123").is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let debug = format!("{:?}", StaticVerifier::superuser());
        assert!(debug.contains("_superuser"));
        assert!(!debug.contains("admin123"));
    }

    #[test]
    fn hashed_verifier_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        let v = HashedVerifier::new("ops", hash).unwrap();
        assert!(v.verify("ops", "s3cret").is_ok());
        assert!(matches!(
            v.verify("ops", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            v.verify("other", "s3cret"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn hashed_verifier_rejects_malformed_hash() {
        let result = HashedVerifier::new("ops", "not-a-phc-string");
        assert!(matches!(result, Err(CoreError::ConfigParse(_))));
    }

    #[test]
    fn hash_password_is_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
