//! Idle detection state machine.
//!
//! Tracks whether the user is present based on a debounce deadline: any
//! qualifying input (mouse movement or key press) marks the user active and
//! re-arms the deadline; letting the deadline expire marks the user idle.
//!
//! All timing-sensitive operations take `now` as a parameter so the event
//! loop supplies the real clock and tests supply a controlled one.

use std::time::{Duration, Instant};

/// Quiet period after which the user is considered idle.
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(3000);

/// User presence as derived from input activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Qualifying input seen within the timeout window
    Active,
    /// The timeout elapsed with no qualifying input
    Idle,
}

/// Debounced idle detector.
///
/// Invariant: at most one deadline is armed at any time. The deadline lives
/// in a single `Option<Instant>`; re-arming overwrites it, so the
/// cancel-then-rearm sequence of the debounce is one assignment.
///
/// The deadline is armed the moment the widget mounts, so a user who never
/// touches anything still goes idle one timeout after mount.
#[derive(Debug, Clone)]
pub struct IdleMonitor {
    mounted: bool,
    presence: Presence,
    /// Pending idle deadline; `None` while idle or unmounted.
    deadline: Option<Instant>,
    timeout: Duration,
}

impl IdleMonitor {
    /// Create an unmounted monitor with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(IDLE_TIMEOUT)
    }

    /// Create an unmounted monitor with a custom timeout (used by tests).
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            mounted: false,
            presence: Presence::Active,
            deadline: None,
            timeout,
        }
    }

    /// Whether the widget is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current presence state.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Whether a deadline is currently armed.
    pub fn has_pending_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Mount the widget: presence starts `Active` with the deadline armed
    /// immediately, not waiting for the first input.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.presence = Presence::Active;
        self.deadline = Some(now + self.timeout);
    }

    /// Unmount the widget, cancelling any pending deadline.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.presence = Presence::Active;
        self.deadline = None;
    }

    /// Record a qualifying input event (mouse movement or key press).
    ///
    /// In either state this transitions to `Active` and replaces the pending
    /// deadline. Ignored while unmounted.
    pub fn record_input(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.presence = Presence::Active;
        self.deadline = Some(now + self.timeout);
    }

    /// Advance the clock: fire the deadline if it has passed.
    ///
    /// Returns `true` if the presence state changed, so the caller knows a
    /// redraw (and a log line) is warranted.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        // Deadline fired un-replaced: go idle until the next input.
        self.deadline = None;
        self.presence = Presence::Idle;
        true
    }
}

impl Default for IdleMonitor {
    fn default() -> Self {
        Self::new()
    }
}
