//! Single-child wrappers that adjust a subtree's style, flex behavior, size,
//! selection or alignment.

use super::container::{hbox, vbox};
use super::node::{Element, Node, Requirement, Selection};
use crate::ui::core::geom::{Bounds, BoundsCell};
use crate::ui::core::grid::{Cursor, CursorShape, Grid};
use crate::ui::core::style::{Color, Mod, Style};

/// Plain pass-through requirement and box for wrappers that only touch paint.
struct Restyle {
    child: Element,
    apply: Box<dyn Fn(&mut Style)>,
}

impl Node for Restyle {
    fn compute_requirement(&mut self) -> Requirement {
        self.child.compute_requirement()
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
        grid.style_rect(self.child.bounds(), |s| (self.apply)(s));
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

fn restyle(child: Element, apply: impl Fn(&mut Style) + 'static) -> Element {
    Element::new(Restyle {
        child,
        apply: Box::new(apply),
    })
}

pub fn bold(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::BOLD)
}

pub fn dim(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::DIM)
}

pub fn italic(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::ITALIC)
}

/// Swaps foreground and background. Applying it twice cancels out.
pub fn inverted(child: Element) -> Element {
    restyle(child, |s| s.mods.toggle(Mod::REVERSE))
}

pub fn underlined(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::UNDERLINE)
}

pub fn underlined_double(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::DOUBLE_UNDERLINE)
}

pub fn blink(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::BLINK)
}

pub fn strikethrough(child: Element) -> Element {
    restyle(child, |s| s.mods |= Mod::STRIKETHROUGH)
}

pub fn color(fg: Color) -> impl FnOnce(Element) -> Element {
    move |child| restyle(child, move |s| s.fg = Some(fg))
}

pub fn bgcolor(bg: Color) -> impl FnOnce(Element) -> Element {
    move |child| restyle(child, move |s| s.bg = Some(bg))
}

struct Flex {
    child: Element,
    adjust: fn(&mut Requirement),
}

impl Node for Flex {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = self.child.compute_requirement();
        (self.adjust)(&mut req);
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

fn with_flex(child: Element, adjust: fn(&mut Requirement)) -> Element {
    Element::new(Flex { child, adjust })
}

/// Grows and shrinks on both axes.
pub fn flex(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_grow_x = 1;
        r.flex_grow_y = 1;
        r.flex_shrink_x = 1;
        r.flex_shrink_y = 1;
    })
}

pub fn flex_grow(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_grow_x = 1;
        r.flex_grow_y = 1;
    })
}

pub fn flex_shrink(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_shrink_x = 1;
        r.flex_shrink_y = 1;
    })
}

pub fn xflex(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_grow_x = 1;
        r.flex_shrink_x = 1;
    })
}

pub fn yflex(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_grow_y = 1;
        r.flex_shrink_y = 1;
    })
}

pub fn xflex_grow(child: Element) -> Element {
    with_flex(child, |r| r.flex_grow_x = 1)
}

pub fn yflex_grow(child: Element) -> Element {
    with_flex(child, |r| r.flex_grow_y = 1)
}

pub fn xflex_shrink(child: Element) -> Element {
    with_flex(child, |r| r.flex_shrink_x = 1)
}

pub fn yflex_shrink(child: Element) -> Element {
    with_flex(child, |r| r.flex_shrink_y = 1)
}

/// Clears every flex factor.
pub fn notflex(child: Element) -> Element {
    with_flex(child, |r| {
        r.flex_grow_x = 0;
        r.flex_grow_y = 0;
        r.flex_shrink_x = 0;
        r.flex_shrink_y = 0;
    })
}

/// Grows to absorb free space. Paints nothing.
pub fn filler() -> Element {
    flex_grow(super::node::empty_element())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthOrHeight {
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    LessThan,
    Equal,
    GreaterThan,
}

struct Size {
    child: Element,
    direction: WidthOrHeight,
    constraint: Constraint,
    value: i32,
}

impl Node for Size {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = self.child.compute_requirement();
        let (min, grow, shrink) = match self.direction {
            WidthOrHeight::Width => (
                &mut req.min_x,
                &mut req.flex_grow_x,
                &mut req.flex_shrink_x,
            ),
            WidthOrHeight::Height => (
                &mut req.min_y,
                &mut req.flex_grow_y,
                &mut req.flex_shrink_y,
            ),
        };
        match self.constraint {
            Constraint::LessThan => *min = (*min).min(self.value),
            Constraint::Equal => *min = self.value,
            Constraint::GreaterThan => *min = (*min).max(self.value),
        }
        *grow = 0;
        *shrink = 0;
        req
    }

    fn set_box(&mut self, mut bounds: Bounds) {
        if self.constraint != Constraint::GreaterThan {
            match self.direction {
                WidthOrHeight::Width => {
                    bounds.x_max = bounds.x_max.min(bounds.x_min + self.value - 1);
                }
                WidthOrHeight::Height => {
                    bounds.y_max = bounds.y_max.min(bounds.y_min + self.value - 1);
                }
            }
        }
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

/// Constrains one dimension of the child and makes it rigid on that axis.
pub fn size(
    direction: WidthOrHeight,
    constraint: Constraint,
    value: i32,
) -> impl FnOnce(Element) -> Element {
    move |child| {
        Element::new(Size {
            child,
            direction,
            constraint,
            value,
        })
    }
}

/// Marks the subtree as selected or focused so an enclosing `frame` keeps it
/// in view. Focus variants may also place the terminal cursor.
struct Select {
    child: Element,
    selection: Selection,
    cursor: Option<CursorShape>,
    bounds: Bounds,
}

impl Node for Select {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = self.child.compute_requirement();
        req.selection = self.selection;
        req.selected_box = Bounds::from_size(0, 0, req.min_x, req.min_y);
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
        if let Some(shape) = self.cursor {
            let (x, y) = (self.bounds.x_min, self.bounds.y_min);
            if grid.stencil().contains(x, y) {
                grid.set_cursor(Some(Cursor { x, y, shape }));
            }
        }
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

fn select_with(child: Element, selection: Selection, cursor: Option<CursorShape>) -> Element {
    Element::new(Select {
        child,
        selection,
        cursor,
        bounds: Bounds::empty(),
    })
}

pub fn select(child: Element) -> Element {
    select_with(child, Selection::Selected, None)
}

pub fn focus(child: Element) -> Element {
    select_with(child, Selection::Focused, None)
}

pub fn focus_cursor_block(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::Block))
}

pub fn focus_cursor_block_blinking(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::BlockBlinking))
}

pub fn focus_cursor_bar(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::Bar))
}

pub fn focus_cursor_bar_blinking(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::BarBlinking))
}

pub fn focus_cursor_underline(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::Underline))
}

pub fn focus_cursor_underline_blinking(child: Element) -> Element {
    select_with(child, Selection::Focused, Some(CursorShape::UnderlineBlinking))
}

/// Focuses a single cell at `(x, y)` relative to the child's origin.
struct FocusPosition {
    child: Element,
    x: i32,
    y: i32,
}

impl Node for FocusPosition {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = self.child.compute_requirement();
        req.selection = Selection::Focused;
        req.selected_box = Bounds::new(self.x, self.x, self.y, self.y);
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

pub fn focus_position(x: i32, y: i32) -> impl FnOnce(Element) -> Element {
    move |child| Element::new(FocusPosition { child, x, y })
}

/// Records the visible part of the child's box at paint time.
struct Reflect {
    child: Element,
    target: BoundsCell,
}

impl Node for Reflect {
    fn compute_requirement(&mut self) -> Requirement {
        self.child.compute_requirement()
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        self.target
            .set(self.child.bounds().intersection(grid.stencil()));
        self.child.paint(grid);
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

pub fn reflect(target: &BoundsCell) -> impl FnOnce(Element) -> Element {
    let target = target.clone();
    move |child| Element::new(Reflect { child, target })
}

/// Blanks the area under the child before painting it.
struct ClearUnder {
    child: Element,
}

impl Node for ClearUnder {
    fn compute_requirement(&mut self) -> Requirement {
        self.child.compute_requirement()
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.child.set_box(bounds);
    }

    fn paint(&self, grid: &mut Grid) {
        grid.fill_rect(self.child.bounds(), Style::default());
        self.child.paint(grid);
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

pub fn clear_under(child: Element) -> Element {
    Element::new(ClearUnder { child })
}

pub fn hcenter(child: Element) -> Element {
    hbox(vec![filler(), child, filler()])
}

pub fn vcenter(child: Element) -> Element {
    vbox(vec![filler(), child, filler()])
}

pub fn center(child: Element) -> Element {
    hcenter(vcenter(child))
}

pub fn align_right(child: Element) -> Element {
    hbox(vec![filler(), child])
}

/// Identity decorator.
pub fn nothing(child: Element) -> Element {
    child
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/decorator.rs"]
mod tests;
