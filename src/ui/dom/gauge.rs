use super::node::{Element, Node, Requirement};
use super::text::text;
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;
use crate::ui::core::style::Mod;

/// Direction in which a gauge fills as its progress grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

// Index `i` is `i` eighths filled from the left.
const HORIZONTAL: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
// Index `i` is `i` eighths empty from the top.
const VERTICAL: [char; 9] = ['█', '▇', '▆', '▅', '▄', '▃', '▂', '▁', ' '];

/// Clamps to `[0, 1]`; NaN counts as empty.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

struct Gauge {
    progress: f32,
    direction: Direction,
    bounds: Bounds,
}

impl Gauge {
    fn paint_horizontal(&self, grid: &mut Grid, invert: bool) {
        let b = self.bounds;
        let y = b.y_min;
        if y > b.y_max {
            return;
        }
        let progress = if invert {
            1.0 - self.progress
        } else {
            self.progress
        };
        let limit = b.x_min as f32 + progress * b.width() as f32;
        let limit_int = limit as i32;
        let mut x = b.x_min;
        while x < limit_int {
            grid.set_symbol(x, y, HORIZONTAL[8]);
            x += 1;
        }
        if x <= b.x_max {
            let eighths = ((limit - limit_int as f32) * 9.0) as usize;
            grid.set_symbol(x, y, HORIZONTAL[eighths.min(8)]);
            x += 1;
        }
        while x <= b.x_max {
            grid.set_symbol(x, y, HORIZONTAL[0]);
            x += 1;
        }
        if invert {
            let row = Bounds::new(b.x_min, b.x_max, y, y);
            grid.style_rect(row, |s| s.mods.toggle(Mod::REVERSE));
        }
    }

    fn paint_vertical(&self, grid: &mut Grid, invert: bool) {
        let b = self.bounds;
        let x = b.x_min;
        if x > b.x_max {
            return;
        }
        // Measured as the empty share from the top.
        let progress = if invert {
            self.progress
        } else {
            1.0 - self.progress
        };
        let limit = b.y_min as f32 + progress * b.height() as f32;
        let limit_int = limit as i32;
        let mut y = b.y_min;
        while y < limit_int {
            grid.set_symbol(x, y, VERTICAL[8]);
            y += 1;
        }
        if y <= b.y_max {
            let eighths = ((limit - limit_int as f32) * 8.0) as usize;
            grid.set_symbol(x, y, VERTICAL[eighths.min(8)]);
            y += 1;
        }
        while y <= b.y_max {
            grid.set_symbol(x, y, VERTICAL[0]);
            y += 1;
        }
        if invert {
            let column = Bounds::new(x, x, b.y_min, b.y_max);
            grid.style_rect(column, |s| s.mods.toggle(Mod::REVERSE));
        }
    }
}

impl Node for Gauge {
    fn compute_requirement(&mut self) -> Requirement {
        let (x, y) = if self.direction.is_horizontal() {
            (1, 0)
        } else {
            (0, 1)
        };
        Requirement {
            min_x: 1,
            min_y: 1,
            flex_grow_x: x,
            flex_shrink_x: x,
            flex_grow_y: y,
            flex_shrink_y: y,
            ..Requirement::default()
        }
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn paint(&self, grid: &mut Grid) {
        match self.direction {
            Direction::Right => self.paint_horizontal(grid, false),
            // Drawn as the complement, then swapped to the background.
            Direction::Left => self.paint_horizontal(grid, true),
            Direction::Up => self.paint_vertical(grid, false),
            Direction::Down => self.paint_vertical(grid, true),
        }
    }
}

/// A bar filled to `progress` in `direction`.
pub fn gauge_direction(progress: f32, direction: Direction) -> Element {
    Element::new(Gauge {
        progress: clamp_progress(progress),
        direction,
        bounds: Bounds::empty(),
    })
}

/// Left-to-right gauge.
pub fn gauge(progress: f32) -> Element {
    gauge_direction(progress, Direction::Right)
}

pub fn gauge_right(progress: f32) -> Element {
    gauge_direction(progress, Direction::Right)
}

pub fn gauge_left(progress: f32) -> Element {
    gauge_direction(progress, Direction::Left)
}

pub fn gauge_up(progress: f32) -> Element {
    gauge_direction(progress, Direction::Up)
}

pub fn gauge_down(progress: f32) -> Element {
    gauge_direction(progress, Direction::Down)
}

const SPINNERS: &[&[&str]] = &[
    &["-", "\\", "|", "/"],
    &[".", "o", "O", "°", "O", "o", "."],
    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
    &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂"],
    &["▉", "▊", "▋", "▌", "▍", "▎", "▏", "▎", "▍", "▌", "▋", "▊", "▉"],
    &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
    &["◢", "◣", "◤", "◥"],
    &["◐", "◓", "◑", "◒"],
];

/// Frame `frame` of spinner animation `charset`. Both indices wrap.
pub fn spinner(charset: usize, frame: usize) -> Element {
    let frames = SPINNERS[charset % SPINNERS.len()];
    text(frames[frame % frames.len()])
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/gauge.rs"]
mod tests;
