//! File-based preference storage.
//!
//! Persists the dark-mode flag as a single file under `~/.pulse/`, holding
//! the literal string `"true"` or `"false"`.

use std::fs;
use std::path::PathBuf;

use crate::traits::{encode_dark_mode, parse_dark_mode, PreferenceStore, DARK_MODE_KEY};

/// The preference directory name.
const PREFERENCES_DIR: &str = ".pulse";

/// File-based implementation of [`PreferenceStore`].
///
/// The stored value is the raw preference literal, not JSON, so the file can
/// be inspected and edited by hand.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    /// Path to the preference file.
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at `~/.pulse/darkMode`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            path: home.join(PREFERENCES_DIR).join(DARK_MODE_KEY),
        })
    }

    /// Create a store backed by an explicit file path.
    ///
    /// Used by tests to point the store at a temporary directory.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path to the preference file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_dark_mode(&self) -> bool {
        match fs::read_to_string(&self.path) {
            Ok(value) => parse_dark_mode(&value),
            Err(_) => false,
        }
    }

    fn save_dark_mode(&self, enabled: bool) -> bool {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                tracing::warn!(path = %self.path.display(), "failed to create preference directory");
                return false;
            }
        }

        match fs::write(&self.path, encode_dark_mode(enabled)) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to write preference");
                false
            }
        }
    }
}
