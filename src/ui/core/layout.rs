use super::geom::Bounds;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn all(v: i32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub const fn xy(x: i32, y: i32) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

impl Bounds {
    /// Shrinks the box; the result may be empty when the insets exceed it.
    pub fn inset(self, insets: Insets) -> Bounds {
        Bounds::new(
            self.x_min + insets.left,
            self.x_max - insets.right,
            self.y_min + insets.top,
            self.y_max - insets.bottom,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
