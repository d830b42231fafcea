//! Dashboard widgets.
//!
//! Each widget is a plain state struct mutated by event callbacks and
//! rendered as one panel. Widgets own their state exclusively; nothing is
//! shared between them. Mounting and unmounting bound every timer and every
//! event subscription to the widget's visible lifetime.

mod activity;
mod idle;
mod pointer;
mod user_card;

pub use activity::ActivityCounter;
pub use idle::{IdleMonitor, Presence, IDLE_TIMEOUT};
pub use pointer::PointerTracker;
pub use user_card::UserCard;
