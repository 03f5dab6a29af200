use super::box_helper::{self, BoxElement};
use super::node::{Axis, Element, Elements, Node, Requirement};
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;

/// Children laid out one after another along `axis`.
struct Stack {
    axis: Axis,
    children: Elements,
}

impl Node for Stack {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = Requirement::default();
        for child in &mut self.children {
            let c = child.compute_requirement();
            match self.axis {
                Axis::Horizontal => {
                    req.merge_selection(&c, req.min_x, 0);
                    req.min_x += c.min_x;
                    req.min_y = req.min_y.max(c.min_y);
                }
                Axis::Vertical => {
                    req.merge_selection(&c, 0, req.min_y);
                    req.min_y += c.min_y;
                    req.min_x = req.min_x.max(c.min_x);
                }
            }
        }
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        let mut elements: Vec<BoxElement> = self
            .children
            .iter()
            .map(|child| {
                let a = child.requirement().axis(self.axis);
                BoxElement::new(a.min, a.flex_grow, a.flex_shrink)
            })
            .collect();

        let target = match self.axis {
            Axis::Horizontal => bounds.width(),
            Axis::Vertical => bounds.height(),
        };
        box_helper::compute(&mut elements, target);

        let mut offset = match self.axis {
            Axis::Horizontal => bounds.x_min,
            Axis::Vertical => bounds.y_min,
        };
        for (child, e) in self.children.iter_mut().zip(&elements) {
            let b = match self.axis {
                Axis::Horizontal => {
                    Bounds::new(offset, offset + e.size - 1, bounds.y_min, bounds.y_max)
                }
                Axis::Vertical => {
                    Bounds::new(bounds.x_min, bounds.x_max, offset, offset + e.size - 1)
                }
            };
            child.set_box(b);
            offset += e.size;
        }
    }

    fn paint(&self, grid: &mut Grid) {
        for child in &self.children {
            child.paint(grid);
        }
    }

    fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

/// Children side by side, left to right.
pub fn hbox(children: Elements) -> Element {
    Element::new(Stack {
        axis: Axis::Horizontal,
        children,
    })
}

/// Children stacked top to bottom.
pub fn vbox(children: Elements) -> Element {
    Element::new(Stack {
        axis: Axis::Vertical,
        children,
    })
}

/// Children drawn over each other in the same box; later ones on top.
struct Depth {
    children: Elements,
}

impl Node for Depth {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = Requirement::default();
        for child in &mut self.children {
            let c = child.compute_requirement();
            req.min_x = req.min_x.max(c.min_x);
            req.min_y = req.min_y.max(c.min_y);
            req.flex_grow_x = req.flex_grow_x.max(c.flex_grow_x);
            req.flex_grow_y = req.flex_grow_y.max(c.flex_grow_y);
            req.flex_shrink_x = req.flex_shrink_x.max(c.flex_shrink_x);
            req.flex_shrink_y = req.flex_shrink_y.max(c.flex_shrink_y);
            req.merge_selection(&c, 0, 0);
        }
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        for child in &mut self.children {
            child.set_box(bounds);
        }
    }

    fn paint(&self, grid: &mut Grid) {
        for child in &self.children {
            child.paint(grid);
        }
    }

    fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

pub fn dbox(children: Elements) -> Element {
    Element::new(Depth { children })
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/container.rs"]
mod tests;
