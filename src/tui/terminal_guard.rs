//! Full-screen terminal session owned by the host binary.

use std::io;

/// A reversible terminal mode.
pub trait TerminalMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw input, alternate screen, mouse and focus reporting, hidden cursor.
#[derive(Debug, Default)]
pub struct FullScreen;

impl TerminalMode for FullScreen {
    fn enter(&mut self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        terminal::enable_raw_mode()?;
        let entered = execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            event::EnableFocusChange,
            cursor::Hide
        );
        if entered.is_err() {
            let _ = terminal::disable_raw_mode();
        }
        entered
    }

    fn leave(&mut self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        // The screen is left even when raw mode cannot be switched off.
        let cooked = terminal::disable_raw_mode();
        execute!(
            io::stdout(),
            terminal::LeaveAlternateScreen,
            event::DisableMouseCapture,
            event::DisableFocusChange,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        )?;
        cooked
    }
}

/// Holds a terminal mode for its lifetime and leaves it exactly once.
pub struct TerminalGuard {
    mode: Option<Box<dyn TerminalMode>>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_mode(FullScreen)
    }

    pub fn with_mode(mut mode: impl TerminalMode + 'static) -> io::Result<Self> {
        mode.enter()?;
        Ok(Self {
            mode: Some(Box::new(mode)),
        })
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Leaves the mode now. Later calls, and the drop, do nothing.
    pub fn release(&mut self) -> io::Result<()> {
        match self.mode.take() {
            Some(mut mode) => mode.leave(),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
