//! cellui - terminal UI runtime.
//!
//! Module layout:
//! - text: grapheme segmentation, display widths, word breaking
//! - core: input events and bound values
//! - ui: geometry and grid, render tree, components, animation, backends
//! - tui: crossterm event source and the host loop (feature `tui`)
//! - config: runtime settings

pub mod config;
pub mod core;
pub mod text;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
