use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;

/// Passes before painting are capped; layouts that keep asking for another
/// iteration are painted with whatever the last pass produced.
pub const MAX_LAYOUT_ITERATIONS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How strongly a subtree wants to stay visible inside a `frame`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selection {
    #[default]
    Normal,
    Selected,
    Focused,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisRequirement {
    pub min: i32,
    pub flex_grow: i32,
    pub flex_shrink: i32,
}

/// Size request of a node, produced bottom-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirement {
    pub min_x: i32,
    pub min_y: i32,
    pub flex_grow_x: i32,
    pub flex_grow_y: i32,
    pub flex_shrink_x: i32,
    pub flex_shrink_y: i32,
    pub selection: Selection,
    /// Box of the selected region, relative to the node's own origin.
    pub selected_box: Bounds,
}

impl Requirement {
    pub fn axis(&self, axis: Axis) -> AxisRequirement {
        match axis {
            Axis::Horizontal => AxisRequirement {
                min: self.min_x,
                flex_grow: self.flex_grow_x,
                flex_shrink: self.flex_shrink_x,
            },
            Axis::Vertical => AxisRequirement {
                min: self.min_y,
                flex_grow: self.flex_grow_y,
                flex_shrink: self.flex_shrink_y,
            },
        }
    }

    /// Adopts `child`'s selection when it is stronger, shifting its box by
    /// the child's offset inside this node.
    pub fn merge_selection(&mut self, child: &Requirement, dx: i32, dy: i32) {
        if child.selection > self.selection {
            self.selection = child.selection;
            self.selected_box = child.selected_box.translate(dx, dy);
        }
    }
}

/// Shared state of one layout iteration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Status {
    pub iteration: usize,
    pub need_iteration: bool,
}

/// A drawable node. Trees are rebuilt for every frame; a node lives for one
/// render pass.
pub trait Node {
    /// Bottom-up: children first, then this node's own request.
    fn compute_requirement(&mut self) -> Requirement;

    /// Top-down: the box this node was granted.
    fn set_box(&mut self, bounds: Bounds);

    fn paint(&self, grid: &mut Grid);

    fn children_mut(&mut self) -> &mut [Element] {
        &mut []
    }

    /// Lets nodes whose requirement depends on their box ask for another
    /// layout pass.
    fn check(&mut self, status: &mut Status) {
        for child in self.children_mut() {
            child.check(status);
        }
    }
}

pub struct Element {
    node: Box<dyn Node>,
    requirement: Requirement,
    bounds: Bounds,
}

impl Element {
    pub fn new(node: impl Node + 'static) -> Self {
        Self {
            node: Box::new(node),
            requirement: Requirement::default(),
            bounds: Bounds::empty(),
        }
    }

    pub fn compute_requirement(&mut self) -> Requirement {
        self.requirement = self.node.compute_requirement();
        self.requirement
    }

    /// The request from the last `compute_requirement` call.
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.node.set_box(bounds);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn check(&mut self, status: &mut Status) {
        self.node.check(status);
    }

    pub fn paint(&self, grid: &mut Grid) {
        self.node.paint(grid);
    }

    /// Lays the tree out over the whole grid and paints it.
    pub fn render(&mut self, grid: &mut Grid) {
        let bounds = grid.bounds();
        for iteration in 0..MAX_LAYOUT_ITERATIONS {
            self.compute_requirement();
            self.set_box(bounds);
            let mut status = Status {
                iteration,
                need_iteration: false,
            };
            self.check(&mut status);
            if !status.need_iteration {
                break;
            }
        }
        grid.set_stencil(bounds);
        self.paint(grid);
    }

    /// `element.pipe(bold)` reads like a decorator chain.
    pub fn pipe(self, decorator: impl FnOnce(Element) -> Element) -> Element {
        decorator(self)
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("requirement", &self.requirement)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

pub type Elements = Vec<Element>;

/// Zero-size node. Paints nothing.
struct Empty;

impl Node for Empty {
    fn compute_requirement(&mut self) -> Requirement {
        Requirement::default()
    }

    fn set_box(&mut self, _bounds: Bounds) {}

    fn paint(&self, _grid: &mut Grid) {}
}

pub fn empty_element() -> Element {
    Element::new(Empty)
}
