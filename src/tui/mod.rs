//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `ui` so components and layout can run headless.

pub mod crossterm;
pub mod screen;
pub mod terminal_guard;

pub use screen::Screen;
pub use terminal_guard::TerminalGuard;
