//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state when the application panics, so
//! the user's shell is not left in raw mode with mouse capture on.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call this early in `main()`, before creating the `TerminalManager`. The
/// hook restores the terminal and then delegates to the original hook so
/// the panic message still prints.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state first
        emergency_restore();

        // Then call the original panic hook to display the panic message
        original_hook(panic_info);
    }));
}
