//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode. These are used by
//! `TerminalManager` but can also be used directly if needed.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// This sets up the terminal for TUI operation:
/// - Enters alternate screen (preserves original terminal content)
/// - Enables mouse capture (movement, clicks)
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore terminal to normal state.
///
/// This performs cleanup in the correct order:
/// 1. Disables raw mode
/// 2. Disables mouse capture
/// 3. Leaves alternate screen (restores original terminal content)
/// 4. Shows the cursor
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    // Disable raw mode first to allow normal terminal operation
    let _ = disable_raw_mode();

    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();

    // Show the cursor
    let _ = execute!(writer, Show);
}

/// Restore terminal to a usable state after a panic or error.
///
/// Combines all cleanup steps and ignores all errors.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
