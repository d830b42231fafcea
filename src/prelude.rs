//! Prelude module for convenient imports.
//!
//! Re-exports the most frequently used items:
//!
//! ```ignore
//! use pulse::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage};

// Widget types
pub use crate::widgets::{ActivityCounter, IdleMonitor, PointerTracker, Presence, UserCard};

// User fetch types
pub use crate::users::{FetchError, UserClient, UserRecord, USER_ENDPOINT};

// Trait abstractions
pub use crate::traits::{HttpClient, PreferenceStore};

// UI types
pub use crate::ui::{render, Theme};
