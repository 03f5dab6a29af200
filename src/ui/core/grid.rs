//! The output grid: styled terminal cells that elements paint into.

use super::geom::Bounds;
use super::style::Style;
use crate::text::cells;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Grapheme drawn in the cell. Empty for the column after a full-width
    /// glyph.
    pub symbol: String,
    /// Columns the symbol occupies: 0 for a placeholder, 1 or 2 otherwise.
    pub width: u8,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            width: 1,
            style: Style::default(),
        }
    }
}

impl Cell {
    fn set_symbol(&mut self, symbol: &str, width: u8) {
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self.width = width;
    }

    pub fn is_placeholder(&self) -> bool {
        self.width == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorShape {
    #[default]
    Hidden,
    Block,
    BlockBlinking,
    Bar,
    BarBlinking,
    Underline,
    UnderlineBlinking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub shape: CursorShape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Light,
    Dashed,
    Heavy,
    Double,
    Rounded,
    Empty,
}

/// Box-drawing characters: corners clockwise from top-left, then the
/// horizontal and vertical edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderCharset {
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    pub fn charset(self) -> BorderCharset {
        let (tl, tr, br, bl, h, v) = match self {
            BorderStyle::Light => ('┌', '┐', '┘', '└', '─', '│'),
            BorderStyle::Dashed => ('┌', '┐', '┘', '└', '╌', '╎'),
            BorderStyle::Heavy => ('┏', '┓', '┛', '┗', '━', '┃'),
            BorderStyle::Double => ('╔', '╗', '╝', '╚', '═', '║'),
            BorderStyle::Rounded => ('╭', '╮', '╯', '╰', '─', '│'),
            BorderStyle::Empty => (' ', ' ', ' ', ' ', ' ', ' '),
        };
        BorderCharset {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
            horizontal: h,
            vertical: v,
        }
    }
}

/// `u16::MAX * u16::MAX` does not fit in an `i32`.
fn cell_count(width: u16, height: u16) -> usize {
    usize::from(width) * usize::from(height)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    stencil: Bounds,
    cursor: Option<Cursor>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); cell_count(width, height)];
        let (width, height) = (i32::from(width), i32::from(height));
        Self {
            width,
            height,
            cells,
            stencil: Bounds::from_size(0, 0, width, height),
            cursor: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(0, 0, self.width, self.height)
    }

    /// Writes outside the stencil are discarded.
    pub fn stencil(&self) -> Bounds {
        self.stencil
    }

    pub fn set_stencil(&mut self, stencil: Bounds) {
        self.stencil = stencil.intersection(self.bounds());
    }

    /// Runs `f` with the stencil narrowed to `clip`, then restores it.
    pub fn with_stencil<R>(&mut self, clip: Bounds, f: impl FnOnce(&mut Grid) -> R) -> R {
        let saved = self.stencil;
        self.stencil = saved.intersection(clip);
        let out = f(self);
        self.stencil = saved;
        out
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }

    /// Resets every cell, the stencil and the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.stencil = self.bounds();
        self.cursor = None;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Grid::new(width, height);
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        // Both coordinates are in range, so the casts are lossless.
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cells.get(self.idx(x, y)?)
    }

    /// Mutable access, honoring the stencil.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if !self.stencil.contains(x, y) {
            return None;
        }
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    /// Row `y` as text. Placeholder cells contribute nothing, so a full-width
    /// glyph appears once.
    pub fn line(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.symbol.as_str())
            .collect()
    }

    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }

    /// Draws `text` one cell per column starting at `(x, y)`, leaving styles
    /// untouched. A full-width glyph whose second column is clipped is not
    /// drawn. Returns the column after the text.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) -> i32 {
        let row = cells(text);
        let mut col = x;
        let mut i = 0;
        while i < row.len() {
            let symbol = row[i].as_str();
            let wide = row.get(i + 1).is_some_and(|next| next.is_empty()) && !symbol.is_empty();
            if wide {
                let left_visible = self.stencil.contains(col, y);
                if left_visible && !self.stencil.contains(col + 1, y) {
                    break;
                }
                if let Some(cell) = self.cell_mut(col, y) {
                    cell.set_symbol(symbol, 2);
                }
                if let Some(cell) = self.cell_mut(col + 1, y) {
                    if left_visible {
                        cell.set_symbol("", 0);
                    } else {
                        // Left half scrolled out of view.
                        cell.set_symbol(" ", 1);
                    }
                }
                col += 2;
                i += 2;
                continue;
            }
            if let Some(cell) = self.cell_mut(col, y) {
                cell.set_symbol(symbol, 1);
            }
            col += 1;
            i += 1;
        }
        col
    }

    pub fn set_symbol(&mut self, x: i32, y: i32, ch: char) {
        if let Some(cell) = self.cell_mut(x, y) {
            let mut buf = [0u8; 4];
            cell.set_symbol(ch.encode_utf8(&mut buf), 1);
        }
    }

    /// Blanks the cells of `rect` and gives them `style`.
    pub fn fill_rect(&mut self, rect: Bounds, style: Style) {
        let clip = rect.intersection(self.stencil);
        for y in clip.y_min..=clip.y_max {
            for x in clip.x_min..=clip.x_max {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.set_symbol(" ", 1);
                    cell.style = style;
                }
            }
        }
    }

    /// Applies `f` to the style of every cell in `rect`, keeping symbols.
    pub fn style_rect(&mut self, rect: Bounds, mut f: impl FnMut(&mut Style)) {
        let clip = rect.intersection(self.stencil);
        for y in clip.y_min..=clip.y_max {
            for x in clip.x_min..=clip.x_max {
                if let Some(cell) = self.cell_mut(x, y) {
                    f(&mut cell.style);
                }
            }
        }
    }

    pub fn draw_hline(&mut self, x: i32, y: i32, len: i32, ch: char) {
        for dx in 0..len.max(0) {
            self.set_symbol(x + dx, y, ch);
        }
    }

    pub fn draw_vline(&mut self, x: i32, y: i32, len: i32, ch: char) {
        for dy in 0..len.max(0) {
            self.set_symbol(x, y + dy, ch);
        }
    }

    /// Frames `rect` with `charset`. Boxes smaller than 2x2 are left alone.
    pub fn draw_border(&mut self, rect: Bounds, charset: BorderCharset) {
        if rect.width() < 2 || rect.height() < 2 {
            return;
        }
        let Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        } = rect;

        self.set_symbol(x_min, y_min, charset.top_left);
        self.set_symbol(x_max, y_min, charset.top_right);
        self.set_symbol(x_max, y_max, charset.bottom_right);
        self.set_symbol(x_min, y_max, charset.bottom_left);

        self.draw_hline(x_min + 1, y_min, rect.width() - 2, charset.horizontal);
        self.draw_hline(x_min + 1, y_max, rect.width() - 2, charset.horizontal);
        self.draw_vline(x_min, y_min + 1, rect.height() - 2, charset.vertical);
        self.draw_vline(x_max, y_min + 1, rect.height() - 2, charset.vertical);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/grid.rs"]
mod tests;
