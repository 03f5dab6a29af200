use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in grid cells. Both ends are inclusive, so a 1x1 box
/// has `x_min == x_max`. A box with `x_min > x_max` (or `y_min > y_max`) is
/// empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bounds {
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The box covering `width x height` cells with its top-left at `(x, y)`.
    pub const fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, x + width - 1, y, y + height - 1)
    }

    pub const fn empty() -> Self {
        Self::new(0, -1, 0, -1)
    }

    pub fn width(&self) -> i32 {
        (self.x_max - self.x_min + 1).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y_max - self.y_min + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    pub fn contains_pos(&self, p: Pos) -> bool {
        self.contains(p.x, p.y)
    }

    pub fn intersection(self, other: Bounds) -> Bounds {
        Bounds::new(
            self.x_min.max(other.x_min),
            self.x_max.min(other.x_max),
            self.y_min.max(other.y_min),
            self.y_max.min(other.y_max),
        )
    }

    /// Smallest box covering both. An empty operand does not contribute.
    pub fn union(self, other: Bounds) -> Bounds {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Bounds::new(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        )
    }

    pub fn translate(self, dx: i32, dy: i32) -> Bounds {
        Bounds::new(
            self.x_min + dx,
            self.x_max + dx,
            self.y_min + dy,
            self.y_max + dy,
        )
    }
}

/// A caller-owned slot that layout writes a node's final box into.
#[derive(Clone, Debug)]
pub struct BoundsCell(Rc<Cell<Bounds>>);

impl Default for BoundsCell {
    fn default() -> Self {
        Self(Rc::new(Cell::new(Bounds::empty())))
    }
}

impl BoundsCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Bounds {
        self.0.get()
    }

    pub fn set(&self, bounds: Bounds) {
        self.0.set(bounds);
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.get().contains(x, y)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
