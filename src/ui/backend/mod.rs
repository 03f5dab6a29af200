//! Rendering backends.
//!
//! Elements paint into a [`Grid`]; a backend presents the finished grid. The
//! trait keeps the rest of the crate free of `ratatui` types.

use crate::ui::core::grid::{Cursor, Grid};

pub trait Backend {
    fn draw(&mut self, grid: &Grid);

    fn set_cursor(&mut self, cursor: Option<Cursor>);
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
