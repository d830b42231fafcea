//! User info card.
//!
//! On mount the card kicks off exactly one fetch of the user record and
//! shows a loading indicator until the result lands. A failed fetch leaves
//! the card in a settled no-data state; it is never retried.
//!
//! The fetch continuation may resolve long after the card was unmounted or
//! remounted. Every mount bumps a generation counter and the spawned task
//! carries the generation it started under; a completion whose generation
//! is stale is discarded, so late results are guaranteed no-ops.

use crate::users::UserRecord;

/// Display state of the user info panel.
#[derive(Debug, Clone, Default)]
pub struct UserCard {
    mounted: bool,
    loading: bool,
    user: Option<UserRecord>,
    /// Current mount generation; completions carrying an older value are
    /// stale and must be dropped.
    generation: u64,
}

impl UserCard {
    /// Create an unmounted card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the widget is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The loaded record, if the fetch succeeded.
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// The current mount generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mount the card and enter the loading state.
    ///
    /// Returns the new mount generation; the caller passes it to the fetch
    /// task so the completion can be matched against the mount it belongs
    /// to.
    pub fn mount(&mut self) -> u64 {
        self.generation += 1;
        self.mounted = true;
        self.loading = true;
        self.user = None;
        self.generation
    }

    /// Unmount the card.
    ///
    /// Bumping the generation here invalidates any in-flight fetch.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.mounted = false;
        self.loading = false;
        self.user = None;
    }

    /// Apply a successful fetch completion.
    ///
    /// Returns `false` (and changes nothing) when the completion is stale.
    pub fn complete(&mut self, generation: u64, user: UserRecord) -> bool {
        if generation != self.generation || !self.mounted {
            return false;
        }
        self.loading = false;
        self.user = Some(user);
        true
    }

    /// Apply a failed fetch completion.
    ///
    /// The card settles into a non-loading, no-data state. Returns `false`
    /// (and changes nothing) when the completion is stale.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.mounted {
            return false;
        }
        self.loading = false;
        self.user = None;
        true
    }
}
