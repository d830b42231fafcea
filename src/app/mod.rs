//! Application state and logic for the dashboard.
//!
//! This module contains the core [`App`] struct: the four widgets, the
//! dark-mode preference, the active theme, and the message channel that
//! spawned fetch tasks report back on. The event loop in `main` routes
//! input events into the methods here; all state transitions happen on
//! those discrete callbacks.

mod messages;

pub use messages::AppMessage;

use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::traits::PreferenceStore;
use crate::ui::Theme;
use crate::users::UserClient;
use crate::widgets::{ActivityCounter, IdleMonitor, PointerTracker, UserCard};

/// Top-level application state.
///
/// Widgets own their state exclusively; the `App` composes them, routes
/// events, and owns the one piece of state that outlives a session: the
/// dark-mode preference, mirrored to the injected store on every change.
pub struct App {
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Dirty flag driving the draw-on-change loop
    pub needs_redraw: bool,
    /// Current dark-mode flag (read from the store at startup)
    pub dark_mode: bool,
    /// Active palette derived from `dark_mode`
    pub theme: Theme,
    /// User info panel
    pub user_card: UserCard,
    /// Mouse position panel
    pub pointer: PointerTracker,
    /// Idle detection panel
    pub idle: IdleMonitor,
    /// Click counter panel
    pub activity: ActivityCounter,
    /// Last rendered area of the activity panel, for click hit-testing
    pub activity_area: Option<Rect>,
    /// Sender handed to spawned fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Injected preference store (read-at-init, write-on-change)
    preferences: Box<dyn PreferenceStore>,
    /// Injected user fetch client
    user_client: UserClient,
}

impl App {
    /// Create the application with its injected collaborators.
    ///
    /// Reads the dark-mode preference here, once; after this the store is
    /// only written, on toggle. No widget is mounted yet; call
    /// [`App::mount_all`] once the runtime is up.
    pub fn new(user_client: UserClient, preferences: Box<dyn PreferenceStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let dark_mode = preferences.load_dark_mode();

        Self {
            should_quit: false,
            needs_redraw: true,
            dark_mode,
            theme: Theme::from_dark_mode(dark_mode),
            user_card: UserCard::new(),
            pointer: PointerTracker::new(),
            idle: IdleMonitor::new(),
            activity: ActivityCounter::new(),
            activity_area: None,
            message_tx,
            message_rx: Some(message_rx),
            preferences,
            user_client,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Flip the dark-mode preference.
    ///
    /// Synchronously swaps the active theme and writes the new value back
    /// to the store. Store failures are logged and otherwise ignored; the
    /// in-session flag still flips.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::from_dark_mode(self.dark_mode);
        if !self.preferences.save_dark_mode(self.dark_mode) {
            tracing::warn!(dark_mode = self.dark_mode, "failed to persist dark mode");
        }
        tracing::info!(dark_mode = self.dark_mode, "dark mode toggled");
        self.mark_dirty();
    }

    /// Mount every widget. Called once at startup.
    pub fn mount_all(&mut self, now: Instant) {
        self.mount_user_card();
        self.pointer.mount();
        self.idle.mount(now);
        self.activity.mount();
        self.mark_dirty();
    }

    /// Mount the user card and spawn its one fetch.
    ///
    /// The task carries the mount generation; a completion arriving after
    /// unmount or remount is recognized as stale in [`App::handle_message`].
    pub fn mount_user_card(&mut self) {
        let generation = self.user_card.mount();
        let client = self.user_client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.fetch_user().await {
                Ok(user) => AppMessage::UserLoaded { generation, user },
                Err(err) => AppMessage::UserLoadFailed {
                    generation,
                    error: err.to_string(),
                },
            };
            // Send fails only when the app is shutting down.
            let _ = message_tx.send(message);
        });

        self.mark_dirty();
    }

    /// Toggle the user card panel.
    pub fn toggle_user_card(&mut self) {
        if self.user_card.is_mounted() {
            self.user_card.unmount();
            self.mark_dirty();
        } else {
            self.mount_user_card();
        }
    }

    /// Toggle the mouse position panel.
    pub fn toggle_pointer(&mut self) {
        if self.pointer.is_mounted() {
            self.pointer.unmount();
        } else {
            self.pointer.mount();
        }
        self.mark_dirty();
    }

    /// Toggle the idle detection panel.
    pub fn toggle_idle(&mut self, now: Instant) {
        if self.idle.is_mounted() {
            self.idle.unmount();
        } else {
            self.idle.mount(now);
        }
        self.mark_dirty();
    }

    /// Toggle the click counter panel.
    pub fn toggle_activity(&mut self) {
        if self.activity.is_mounted() {
            self.activity.unmount();
            self.activity_area = None;
        } else {
            self.activity.mount();
        }
        self.mark_dirty();
    }

    /// Record a qualifying input event (key press or mouse movement).
    pub fn on_qualifying_input(&mut self, now: Instant) {
        self.idle.record_input(now);
    }

    /// Handle a mouse-move event.
    pub fn on_mouse_moved(&mut self, now: Instant, column: u16, row: u16) {
        self.on_qualifying_input(now);
        if self.pointer.is_mounted() {
            self.pointer.record_move(column, row);
            self.mark_dirty();
        }
    }

    /// Handle a left click at the given position.
    ///
    /// Clicks are scoped to the activity panel's rendered area; anywhere
    /// else they are ignored.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.activity_area else {
            return;
        };
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if inside && self.activity.is_mounted() {
            self.activity.record_click();
            self.mark_dirty();
        }
    }

    /// Apply a message from a spawned async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::UserLoaded { generation, user } => {
                if self.user_card.complete(generation, user) {
                    tracing::info!("user record loaded");
                    self.mark_dirty();
                } else {
                    tracing::debug!(generation, "dropped stale user fetch result");
                }
            }
            AppMessage::UserLoadFailed { generation, error } => {
                if self.user_card.fail(generation) {
                    tracing::warn!(%error, "user fetch failed");
                    self.mark_dirty();
                } else {
                    tracing::debug!(generation, "dropped stale user fetch failure");
                }
            }
        }
    }

    /// Drain pending effects. Called once per event-loop iteration.
    ///
    /// Fires the idle deadline if it has passed, and emits the activity log
    /// line once per distinct count value.
    pub fn run_effects(&mut self, now: Instant) {
        if self.idle.poll(now) {
            tracing::debug!(presence = ?self.idle.presence(), "presence changed");
            self.mark_dirty();
        }
        if let Some(count) = self.activity.take_count_change() {
            tracing::info!(count, "interaction count changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryPreferences, MockHttpClient};
    use crate::widgets::Presence;
    use std::sync::Arc;

    fn test_app(preferences: InMemoryPreferences) -> App {
        let client = UserClient::with_endpoint(
            Arc::new(MockHttpClient::new()),
            "https://api.test/users/1",
        );
        App::new(client, Box::new(preferences))
    }

    #[test]
    fn test_starts_in_light_mode_without_stored_preference() {
        let app = test_app(InMemoryPreferences::new());
        assert!(!app.dark_mode);
        assert_eq!(app.theme, Theme::light());
    }

    #[test]
    fn test_reads_stored_dark_mode_at_startup() {
        let app = test_app(InMemoryPreferences::with_value("true"));
        assert!(app.dark_mode);
        assert_eq!(app.theme, Theme::dark());
    }

    #[test]
    fn test_toggle_writes_literal_value() {
        let store = InMemoryPreferences::new();
        let mut app = test_app(store.clone());

        app.toggle_dark_mode();
        assert!(app.dark_mode);
        assert_eq!(app.theme, Theme::dark());
        assert_eq!(store.stored_value().as_deref(), Some("true"));
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let store = InMemoryPreferences::new();
        let mut app = test_app(store.clone());

        app.toggle_dark_mode();
        app.toggle_dark_mode();
        assert!(!app.dark_mode);
        assert_eq!(app.theme, Theme::light());
        assert_eq!(store.stored_value().as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_survives_store_failure() {
        let store = InMemoryPreferences::new();
        store.set_save_should_fail(true);
        let mut app = test_app(store);

        app.toggle_dark_mode();
        assert!(app.dark_mode);
    }

    #[test]
    fn test_click_outside_activity_area_is_ignored() {
        let mut app = test_app(InMemoryPreferences::new());
        app.activity.mount();
        app.activity_area = Some(Rect::new(10, 10, 20, 5));

        app.on_click(5, 5);
        assert_eq!(app.activity.count(), 0);

        app.on_click(10, 10);
        app.on_click(29, 14);
        assert_eq!(app.activity.count(), 2);

        // One past the far edge is outside.
        app.on_click(30, 10);
        app.on_click(10, 15);
        assert_eq!(app.activity.count(), 2);
    }

    #[test]
    fn test_run_effects_fires_idle_transition() {
        let mut app = test_app(InMemoryPreferences::new());
        let now = Instant::now();
        app.idle.mount(now);
        app.needs_redraw = false;

        app.run_effects(now + crate::widgets::IDLE_TIMEOUT);
        assert_eq!(app.idle.presence(), Presence::Idle);
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_stale_fetch_completion_is_noop() {
        let mut app = test_app(InMemoryPreferences::new());

        let stale = app.user_card.mount();
        app.user_card.unmount();
        let current = app.user_card.mount();

        app.handle_message(AppMessage::UserLoaded {
            generation: stale,
            user: crate::users::UserRecord {
                name: "Stale".to_string(),
                email: "stale@example.com".to_string(),
            },
        });
        assert!(app.user_card.user().is_none());
        assert!(app.user_card.is_loading());

        app.handle_message(AppMessage::UserLoaded {
            generation: current,
            user: crate::users::UserRecord {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            },
        });
        assert_eq!(app.user_card.user().unwrap().name, "John Doe");
    }
}
