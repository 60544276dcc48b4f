//! Terminal mode management
//!
//! [`TerminalModes`] puts the terminal into raw mode on the alternate screen
//! and puts it back when dropped. [`emergency_cleanup`] does the same from a
//! panic hook, where the guard may never get to run.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard for the terminal modes the editor enables
#[derive(Debug)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalModes {
    /// Enable raw mode and switch to the alternate screen. Anything enabled
    /// before a failure is undone when the partial guard drops.
    pub fn enable() -> io::Result<Self> {
        let mut modes = Self {
            raw_mode: false,
            alternate_screen: false,
        };

        terminal::enable_raw_mode()?;
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        execute!(io::stdout(), EnterAlternateScreen)?;
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        Ok(modes)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn undo(&mut self) {
        let mut stdout = io::stdout();
        if self.alternate_screen {
            let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
        }
        let _ = stdout.flush();
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Best-effort restore for use from a panic hook
pub fn emergency_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}
