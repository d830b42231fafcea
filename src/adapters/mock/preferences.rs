//! In-memory preference store for testing.
//!
//! Stores the same literal `"true"`/`"false"` values as the file-based
//! store, so tests can assert on exactly what would be persisted.

use std::sync::{Arc, Mutex};

use crate::traits::{encode_dark_mode, parse_dark_mode, PreferenceStore};

/// In-memory implementation of [`PreferenceStore`].
///
/// Cloning shares the underlying storage, so a test can keep a handle to
/// inspect the stored value after handing a clone to the application. This
/// also makes a "restart" observable: build a new `App` over a clone and the
/// previously saved value is still there.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    /// Raw stored value, `None` when nothing has been written yet.
    value: Arc<Mutex<Option<String>>>,
    /// When true, saves are dropped and reported as failed.
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    /// Create an empty in-memory store (no stored preference).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a raw stored value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.to_string()))),
            save_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Get the raw stored value, if any.
    pub fn stored_value(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    /// Configure whether saves should fail.
    pub fn set_save_should_fail(&self, fail: bool) {
        *self.save_should_fail.lock().unwrap() = fail;
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn load_dark_mode(&self) -> bool {
        self.value
            .lock()
            .unwrap()
            .as_deref()
            .map(parse_dark_mode)
            .unwrap_or(false)
    }

    fn save_dark_mode(&self, enabled: bool) -> bool {
        if *self.save_should_fail.lock().unwrap() {
            return false;
        }
        *self.value.lock().unwrap() = Some(encode_dark_mode(enabled).to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_light_mode() {
        let store = InMemoryPreferences::new();
        assert!(!store.load_dark_mode());
        assert!(store.stored_value().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = InMemoryPreferences::new();
        assert!(store.save_dark_mode(true));
        assert!(store.load_dark_mode());
        assert_eq!(store.stored_value().as_deref(), Some("true"));
    }

    #[test]
    fn test_seeded_value() {
        assert!(InMemoryPreferences::with_value("true").load_dark_mode());
        assert!(!InMemoryPreferences::with_value("false").load_dark_mode());
        assert!(!InMemoryPreferences::with_value("banana").load_dark_mode());
    }

    #[test]
    fn test_clone_shares_storage() {
        let store = InMemoryPreferences::new();
        let handle = store.clone();

        store.save_dark_mode(true);
        assert_eq!(handle.stored_value().as_deref(), Some("true"));
    }

    #[test]
    fn test_failing_save() {
        let store = InMemoryPreferences::new();
        store.set_save_should_fail(true);
        assert!(!store.save_dark_mode(true));
        assert!(store.stored_value().is_none());
    }
}
