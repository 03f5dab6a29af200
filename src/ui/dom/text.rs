use super::flexbox::{flexbox, FlexboxConfig, JustifyContent};
use super::decorator::xflex;
use super::node::{Element, Node, Requirement};
use crate::text::{cells, split_words, string_width};
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::Grid;

struct Text {
    text: String,
    bounds: Bounds,
}

impl Node for Text {
    fn compute_requirement(&mut self) -> Requirement {
        let width = string_width(&self.text) as i32;
        Requirement {
            min_x: width,
            min_y: 1,
            selected_box: Bounds::new(0, width - 1, 0, 0),
            ..Requirement::default()
        }
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn paint(&self, grid: &mut Grid) {
        let b = self.bounds;
        if b.is_empty() {
            return;
        }
        grid.with_stencil(b, |g| {
            g.draw_text(b.x_min, b.y_min, &self.text);
        });
    }
}

/// A single line of text. Width is measured in terminal columns.
pub fn text(s: impl Into<String>) -> Element {
    Element::new(Text {
        text: s.into(),
        bounds: Bounds::empty(),
    })
}

/// One glyph per row, top to bottom.
struct VText {
    glyphs: Vec<String>,
    width: i32,
    bounds: Bounds,
}

impl Node for VText {
    fn compute_requirement(&mut self) -> Requirement {
        Requirement {
            min_x: self.width,
            min_y: self.glyphs.len() as i32,
            ..Requirement::default()
        }
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn paint(&self, grid: &mut Grid) {
        let b = self.bounds;
        grid.with_stencil(b, |g| {
            for (dy, glyph) in self.glyphs.iter().enumerate() {
                let y = b.y_min + dy as i32;
                if y > b.y_max {
                    break;
                }
                g.draw_text(b.x_min, y, glyph);
            }
        });
    }
}

pub fn vtext(s: impl AsRef<str>) -> Element {
    let row = cells(s.as_ref());
    let mut glyphs = Vec::new();
    let mut width = 0;
    for (i, cell) in row.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let wide = row.get(i + 1).is_some_and(|next| next.is_empty());
        width = width.max(if wide { 2 } else { 1 });
        glyphs.push(cell.clone());
    }
    Element::new(VText {
        glyphs,
        width,
        bounds: Bounds::empty(),
    })
}

fn words(s: &str) -> Vec<Element> {
    split_words(s).into_iter().map(text).collect()
}

fn paragraph_with(s: &str, justify: JustifyContent) -> Element {
    let config = FlexboxConfig::default()
        .with_gap(1, 0)
        .with_justify_content(justify);
    flexbox(words(s), config)
}

/// Words wrapped onto as many lines as the width requires.
pub fn paragraph(s: impl AsRef<str>) -> Element {
    paragraph_align_left(s)
}

pub fn paragraph_align_left(s: impl AsRef<str>) -> Element {
    paragraph_with(s.as_ref(), JustifyContent::FlexStart)
}

pub fn paragraph_align_right(s: impl AsRef<str>) -> Element {
    paragraph_with(s.as_ref(), JustifyContent::FlexEnd)
}

pub fn paragraph_align_center(s: impl AsRef<str>) -> Element {
    paragraph_with(s.as_ref(), JustifyContent::Center)
}

/// Spreads every line but the last across the full width.
pub fn paragraph_align_justify(s: impl AsRef<str>) -> Element {
    let mut elements = words(s.as_ref());
    // A growable tail keeps the last line packed to the left.
    elements.push(xflex(text("")));
    let config = FlexboxConfig::default()
        .with_gap(1, 0)
        .with_justify_content(JustifyContent::SpaceBetween);
    flexbox(elements, config)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/text.rs"]
mod tests;
