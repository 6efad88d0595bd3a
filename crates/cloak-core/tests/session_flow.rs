//! End-to-end session scenarios against an on-disk store.

use cloak_core::{
    AuthError, FileStore, KeyValueStore, Notice, ProtectionSettings, SessionGate, SessionState,
    SettingsField, StaticVerifier, TOKEN_KEY,
};
use tempfile::TempDir;

fn gate_at(dir: &TempDir) -> SessionGate {
    SessionGate::new(
        Box::new(FileStore::in_dir(dir.path())),
        Box::new(StaticVerifier::superuser()),
    )
}

#[test]
fn login_survives_restart_until_logout() {
    let tmp = TempDir::new().unwrap();

    let mut first = gate_at(&tmp);
    assert!(first.restore_session().is_none());
    let token = first.authenticate("_superuser", "admin123").unwrap();

    // A fresh process sees the same token.
    let mut second = gate_at(&tmp);
    assert_eq!(second.restore_session(), Some(token.clone()));
    assert_eq!(second.state(), &SessionState::Authenticated(token));

    second.logout().unwrap();

    let mut third = gate_at(&tmp);
    assert!(third.restore_session().is_none());
    assert!(!third.is_authenticated());
}

#[test]
fn wrong_password_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let mut gate = gate_at(&tmp);

    let err = gate.authenticate("_superuser", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "invalid credentials");

    let store = FileStore::in_dir(tmp.path());
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn externally_written_token_is_trusted() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::in_dir(tmp.path());
    store.set(TOKEN_KEY, "hand-written").unwrap();

    let mut gate = gate_at(&tmp);
    let token = gate.restore_session().unwrap();
    assert_eq!(token.as_str(), "hand-written");
}

#[test]
fn corrupt_store_reads_as_logged_out() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("storage.json"), "{not json").unwrap();

    let mut gate = gate_at(&tmp);
    assert!(gate.restore_session().is_none());
    assert!(!gate.is_authenticated());
}

#[test]
fn login_recovers_from_corrupt_store() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("storage.json"), "{not json").unwrap();

    let mut gate = gate_at(&tmp);
    assert!(gate.restore_session().is_none());
    let token = gate.authenticate("_superuser", "admin123").unwrap();
    assert!(gate.is_authenticated());

    let mut restarted = gate_at(&tmp);
    assert_eq!(restarted.restore_session(), Some(token));
}

#[test]
fn settings_edit_then_save() {
    let settings = ProtectionSettings::default();
    let edited = settings
        .update_field(SettingsField::RateLimit, "500")
        .unwrap();
    assert_eq!(
        edited,
        ProtectionSettings {
            enabled: true,
            rate_limit: 500,
            block_duration_secs: 300,
        }
    );

    let rejected = edited.update_field(SettingsField::BlockDuration, "abc");
    assert!(rejected.is_err());
    assert_eq!(edited.block_duration_secs, 300);

    assert_eq!(edited.save().into_notice(), Notice::settings_saved());
}
