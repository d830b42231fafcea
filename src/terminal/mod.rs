//! Terminal management module with RAII pattern for automatic cleanup.
//!
//! The `TerminalManager` ensures that terminal state is properly restored
//! when the application exits, whether normally or due to a panic.
//!
//! # Example
//!
//! ```no_run
//! use pulse::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... run the application ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// RAII guard that automatically restores terminal state on drop.
pub struct TerminalGuard {
    /// Whether cleanup has already been performed
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Manually perform cleanup.
    ///
    /// This is called by Drop, but can also be called manually if needed.
    /// Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Manages terminal state with automatic cleanup via RAII.
///
/// Sets up the terminal for TUI operation when created (raw mode, alternate
/// screen, mouse capture) and restores it when dropped. The panic hook
/// installed by [`setup_panic_hook`] covers panic paths where the Drop
/// might not run.
pub struct TerminalManager {
    /// The ratatui terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// RAII guard for cleanup
    _guard: TerminalGuard,
}

impl TerminalManager {
    /// Create a new terminal manager.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let guard = TerminalGuard::new();

        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}
