//! UI layer.
//!
//! Components render into elements, elements lay out and paint into a grid,
//! and a backend presents the grid. Only the backend knows about `ratatui`.

pub mod animation;
pub mod backend;
pub mod component;
pub mod core;
pub mod dom;
