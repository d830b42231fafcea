//! Integration tests for dark-mode persistence.
//!
//! Covers the startup read, the write-on-toggle, idempotence under double
//! toggle, and survival across a simulated restart (a fresh `App` over the
//! same store).

mod common;

use common::{app_with, mock_http_with_user, JOHN_DOE_JSON};
use pulse::adapters::mock::InMemoryPreferences;
use pulse::adapters::FilePreferenceStore;
use pulse::app::App;
use pulse::traits::{PreferenceStore, DARK_MODE_KEY};
use pulse::ui::Theme;
use pulse::users::UserClient;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_no_stored_preference_starts_light() {
    let mock = mock_http_with_user(JOHN_DOE_JSON);
    let app = app_with(&mock, InMemoryPreferences::new());

    assert!(!app.dark_mode);
    assert_eq!(app.theme, Theme::light());
}

#[test]
fn test_one_toggle_goes_dark_and_stores_true() {
    let mock = mock_http_with_user(JOHN_DOE_JSON);
    let store = InMemoryPreferences::new();
    let mut app = app_with(&mock, store.clone());

    app.toggle_dark_mode();

    assert!(app.dark_mode);
    assert_eq!(app.theme, Theme::dark());
    assert_eq!(store.stored_value().as_deref(), Some("true"));
}

#[test]
fn test_double_toggle_is_idempotent() {
    let mock = mock_http_with_user(JOHN_DOE_JSON);
    let store = InMemoryPreferences::new();
    let mut app = app_with(&mock, store.clone());

    app.toggle_dark_mode();
    app.toggle_dark_mode();

    assert!(!app.dark_mode);
    assert_eq!(app.theme, Theme::light());
    assert_eq!(store.stored_value().as_deref(), Some("false"));
}

#[test]
fn test_dark_mode_survives_restart() {
    let mock = mock_http_with_user(JOHN_DOE_JSON);
    let store = InMemoryPreferences::new();

    {
        let mut app = app_with(&mock, store.clone());
        app.toggle_dark_mode();
        assert!(app.dark_mode);
    }

    // Simulated restart: a fresh App over the same store.
    let app = app_with(&mock, store);
    assert!(app.dark_mode);
    assert_eq!(app.theme, Theme::dark());
}

#[test]
fn test_file_store_restart_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DARK_MODE_KEY);
    let mock = mock_http_with_user(JOHN_DOE_JSON);

    let make_app = |mock: &pulse::adapters::mock::MockHttpClient| -> App {
        let client = UserClient::with_endpoint(Arc::new(mock.clone()), common::TEST_ENDPOINT);
        App::new(
            client,
            Box::new(FilePreferenceStore::with_path(path.clone())),
        )
    };

    let mut app = make_app(&mock);
    assert!(!app.dark_mode);

    app.toggle_dark_mode();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "true");

    // "Reload": a fresh App reading the same file starts dark.
    let app = make_app(&mock);
    assert!(app.dark_mode);
}

#[test]
fn test_corrupt_stored_value_falls_back_to_light() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DARK_MODE_KEY);
    std::fs::write(&path, "maybe").unwrap();

    let store = FilePreferenceStore::with_path(path);
    assert!(!store.load_dark_mode());
}
