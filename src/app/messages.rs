//! AppMessage enum for async communication within the application.

use crate::users::UserRecord;

/// Messages received from spawned async operations.
///
/// The only async operation in the system is the user fetch; its completion
/// re-enters the event loop through this channel. Every variant carries the
/// mount generation the operation was started under so stale completions
/// can be recognized and dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The user fetch resolved successfully
    UserLoaded {
        /// Mount generation the fetch belongs to
        generation: u64,
        /// The fetched record
        user: UserRecord,
    },
    /// The user fetch failed
    UserLoadFailed {
        /// Mount generation the fetch belongs to
        generation: u64,
        /// Human-readable failure description
        error: String,
    },
}
