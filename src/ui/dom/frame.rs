use super::node::{Element, Node, Requirement};
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;

/// Viewport over a child that may be larger than the box granted to it. The
/// child is laid out at its full size and shifted so its selected region
/// stays visible; painting is clipped to the viewport.
struct Frame {
    child: Element,
    scroll_x: bool,
    scroll_y: bool,
    bounds: Bounds,
}

/// Offset that centers `selected` inside `outer` columns, kept inside the
/// scrollable range of an `inner`-sized child.
fn scroll_offset(selected_min: i32, selected_len: i32, outer: i32, inner: i32) -> i32 {
    let dx = selected_min + selected_len / 2 - outer / 2;
    dx.clamp(0, (inner - outer).max(0))
}

impl Node for Frame {
    fn compute_requirement(&mut self) -> Requirement {
        self.child.compute_requirement()
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        let req = *self.child.requirement();
        let selected = req.selected_box;
        let mut inner = bounds;

        if self.scroll_x {
            let outer = bounds.width();
            let width = req.min_x.max(outer);
            let dx = scroll_offset(selected.x_min, selected.width(), outer, width);
            inner.x_min = bounds.x_min - dx;
            inner.x_max = inner.x_min + width - 1;
        }
        if self.scroll_y {
            let outer = bounds.height();
            let height = req.min_y.max(outer);
            let dy = scroll_offset(selected.y_min, selected.height(), outer, height);
            inner.y_min = bounds.y_min - dy;
            inner.y_max = inner.y_min + height - 1;
        }
        self.child.set_box(inner);
    }

    fn paint(&self, grid: &mut Grid) {
        grid.with_stencil(self.bounds, |g| self.child.paint(g));
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

fn framed(child: Element, scroll_x: bool, scroll_y: bool) -> Element {
    Element::new(Frame {
        child,
        scroll_x,
        scroll_y,
        bounds: Bounds::empty(),
    })
}

/// Scrolls on both axes.
pub fn frame(child: Element) -> Element {
    framed(child, true, true)
}

pub fn xframe(child: Element) -> Element {
    framed(child, true, false)
}

pub fn yframe(child: Element) -> Element {
    framed(child, false, true)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/frame.rs"]
mod tests;
