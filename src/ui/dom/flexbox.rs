//! Wrapping container: children are packed into lines along the main axis and
//! lines are stacked along the cross axis.

use super::box_helper::{self, BoxElement};
use super::node::{Element, Elements, Node, Requirement, Status};
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;

// Main-axis size assumed before the first layout pass has reported a box.
const UNBOUNDED: i32 = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowInversed,
    Column,
    ColumnInversed,
}

impl FlexDirection {
    fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowInversed)
    }

    fn is_inversed(self) -> bool {
        matches!(
            self,
            FlexDirection::RowInversed | FlexDirection::ColumnInversed
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    NoWrap,
    #[default]
    Wrap,
    WrapInversed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlexboxConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub gap_x: i32,
    pub gap_y: i32,
}

impl FlexboxConfig {
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    pub fn with_gap(mut self, x: i32, y: i32) -> Self {
        self.gap_x = x;
        self.gap_y = y;
        self
    }

    fn gaps(&self) -> (i32, i32) {
        if self.direction.is_row() {
            (self.gap_x, self.gap_y)
        } else {
            (self.gap_y, self.gap_x)
        }
    }
}

/// A child's request projected on the main/cross axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Item {
    pub main: i32,
    pub cross: i32,
    pub grow: i32,
    pub shrink: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Placement {
    pub main_pos: i32,
    pub main_len: i32,
    pub cross_pos: i32,
    pub cross_len: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Layout {
    pub placements: Vec<Placement>,
    pub extent_main: i32,
    pub extent_cross: i32,
}

fn break_lines(config: &FlexboxConfig, items: &[Item], main_size: i32) -> Vec<Vec<usize>> {
    let (gap_main, _) = config.gaps();
    let mut lines = Vec::new();
    let mut line: Vec<usize> = Vec::new();
    let mut used = 0;
    for (i, item) in items.iter().enumerate() {
        let needed = if line.is_empty() {
            item.main
        } else {
            used + gap_main + item.main
        };
        // Zero-size items never start a line of their own.
        let overflow = needed > main_size && item.main > 0;
        if config.wrap != FlexWrap::NoWrap && !line.is_empty() && overflow {
            lines.push(std::mem::take(&mut line));
            used = item.main;
        } else {
            used = needed;
        }
        line.push(i);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Offset of the `k`-th of `n` items produced by distributing `extra` free
/// columns per `justify`.
fn justify_shift(justify: JustifyContent, extra: i32, k: i32, n: i32) -> i32 {
    match justify {
        JustifyContent::FlexStart | JustifyContent::Stretch => 0,
        JustifyContent::FlexEnd => extra,
        JustifyContent::Center => extra / 2,
        JustifyContent::SpaceBetween if n > 1 => extra * k / (n - 1),
        JustifyContent::SpaceBetween => 0,
        JustifyContent::SpaceAround => extra * (2 * k + 1) / (2 * n),
        JustifyContent::SpaceEvenly => extra * (k + 1) / (n + 1),
    }
}

pub(crate) fn layout(
    config: &FlexboxConfig,
    items: &[Item],
    main_size: i32,
    cross_size: Option<i32>,
) -> Layout {
    let (gap_main, gap_cross) = config.gaps();
    let lines = break_lines(config, items, main_size);
    let mut placements = vec![Placement::default(); items.len()];
    let mut extent_main = 0;
    let mut cross_offset = 0;

    for line in &lines {
        let n = line.len() as i32;
        let avail = main_size - gap_main * (n - 1);
        let stretch = config.justify_content == JustifyContent::Stretch;
        let mut elements: Vec<BoxElement> = line
            .iter()
            .map(|&i| {
                let it = items[i];
                BoxElement::new(it.main, if stretch { 1 } else { it.grow }, it.shrink)
            })
            .collect();
        let natural: i32 = elements.iter().map(|e| e.min_size).sum();
        extent_main = extent_main.max(natural + gap_main * (n - 1));

        let distribute = natural > avail || elements.iter().any(|e| e.flex_grow > 0);
        let extra = if distribute {
            box_helper::compute(&mut elements, avail);
            0
        } else {
            for e in &mut elements {
                e.size = e.min_size;
            }
            avail - natural
        };

        let mut line_cross = line.iter().map(|&i| items[i].cross).max().unwrap_or(0);
        if lines.len() == 1 {
            if let Some(cross) = cross_size {
                line_cross = line_cross.max(cross);
            }
        }

        let mut before = 0;
        for (k, (&i, e)) in line.iter().zip(&elements).enumerate() {
            let k = k as i32;
            let shift = justify_shift(config.justify_content, extra, k, n);
            let main_pos = before + k * gap_main + shift;
            before += e.size;

            let item_cross = items[i].cross;
            let (cross_pos, cross_len) = match config.align_items {
                AlignItems::FlexStart => (0, item_cross),
                AlignItems::FlexEnd => (line_cross - item_cross, item_cross),
                AlignItems::Center => ((line_cross - item_cross) / 2, item_cross),
                AlignItems::Stretch => (0, line_cross),
            };
            placements[i] = Placement {
                main_pos,
                main_len: e.size,
                cross_pos: cross_offset + cross_pos,
                cross_len,
            };
        }
        cross_offset += line_cross + gap_cross;
    }
    let extent_cross = if lines.is_empty() {
        0
    } else {
        cross_offset - gap_cross
    };

    if config.direction.is_inversed() {
        for p in &mut placements {
            p.main_pos = main_size - p.main_pos - p.main_len;
        }
    }
    if config.wrap == FlexWrap::WrapInversed {
        let total = cross_size.unwrap_or(extent_cross);
        for p in &mut placements {
            p.cross_pos = total - p.cross_pos - p.cross_len;
        }
    }

    Layout {
        placements,
        extent_main,
        extent_cross,
    }
}

struct Flexbox {
    children: Elements,
    config: FlexboxConfig,
    asked: i32,
    need_iteration: bool,
}

impl Flexbox {
    fn items(&self) -> Vec<Item> {
        let row = self.config.direction.is_row();
        self.children
            .iter()
            .map(|child| {
                let r = child.requirement();
                if row {
                    Item {
                        main: r.min_x,
                        cross: r.min_y,
                        grow: r.flex_grow_x,
                        shrink: r.flex_shrink_x,
                    }
                } else {
                    Item {
                        main: r.min_y,
                        cross: r.min_x,
                        grow: r.flex_grow_y,
                        shrink: r.flex_shrink_y,
                    }
                }
            })
            .collect()
    }

    fn to_bounds(&self, origin_x: i32, origin_y: i32, p: &Placement) -> Bounds {
        if self.config.direction.is_row() {
            Bounds::from_size(
                origin_x + p.main_pos,
                origin_y + p.cross_pos,
                p.main_len,
                p.cross_len,
            )
        } else {
            Bounds::from_size(
                origin_x + p.cross_pos,
                origin_y + p.main_pos,
                p.cross_len,
                p.main_len,
            )
        }
    }
}

impl Node for Flexbox {
    fn compute_requirement(&mut self) -> Requirement {
        for child in &mut self.children {
            child.compute_requirement();
        }
        let items = self.items();
        let layout = layout(&self.config, &items, self.asked, None);

        let mut req = Requirement::default();
        if self.config.direction.is_row() {
            req.min_x = layout.extent_main;
            req.min_y = layout.extent_cross;
            req.flex_grow_x = 1;
            req.flex_shrink_x = 1;
        } else {
            req.min_x = layout.extent_cross;
            req.min_y = layout.extent_main;
            req.flex_grow_y = 1;
            req.flex_shrink_y = 1;
        }
        for (child, p) in self.children.iter().zip(&layout.placements) {
            let b = self.to_bounds(0, 0, p);
            req.merge_selection(child.requirement(), b.x_min, b.y_min);
        }
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        let (main, cross) = if self.config.direction.is_row() {
            (bounds.width(), bounds.height())
        } else {
            (bounds.height(), bounds.width())
        };
        let previous = self.asked;
        self.asked = self.asked.min(main);
        self.need_iteration = self.asked != previous;

        let items = self.items();
        let layout = layout(&self.config, &items, main, Some(cross));
        let boxes: Vec<Bounds> = layout
            .placements
            .iter()
            .map(|p| self.to_bounds(bounds.x_min, bounds.y_min, p))
            .collect();
        for (child, b) in self.children.iter_mut().zip(boxes) {
            child.set_box(b);
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

    fn check(&mut self, status: &mut Status) {
        for child in &mut self.children {
            child.check(status);
        }
        status.need_iteration |= self.need_iteration;
    }
}

pub fn flexbox(children: Elements, config: FlexboxConfig) -> Element {
    Element::new(Flexbox {
        children,
        config,
        asked: UNBOUNDED,
        need_iteration: false,
    })
}

/// Row-oriented wrapping flow.
pub fn hflow(children: Elements) -> Element {
    flexbox(children, FlexboxConfig::default())
}

/// Column-oriented wrapping flow.
pub fn vflow(children: Elements) -> Element {
    flexbox(
        children,
        FlexboxConfig::default().with_direction(FlexDirection::Column),
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/flexbox.rs"]
mod tests;
