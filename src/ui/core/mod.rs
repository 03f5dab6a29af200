pub mod geom;
pub mod grid;
pub mod layout;
pub mod style;

pub use geom::{Bounds, BoundsCell, Pos};
pub use grid::{BorderCharset, BorderStyle, Cell, Cursor, CursorShape, Grid};
pub use layout::Insets;
pub use style::{Color, Mod, Style};
