use super::node::{Element, Node, Requirement};
use crate::ui::core::geom::Bounds;
use crate::ui::core::grid::{BorderStyle, Grid};
use crate::ui::core::layout::Insets;
use crate::ui::core::style::Color;

struct Border {
    child: Element,
    title: Option<Element>,
    style: BorderStyle,
    color: Option<Color>,
    bounds: Bounds,
}

impl Node for Border {
    fn compute_requirement(&mut self) -> Requirement {
        let mut req = self.child.compute_requirement();
        let child = req;
        req.min_x += 2;
        req.min_y += 2;
        if let Some(title) = &mut self.title {
            let t = title.compute_requirement();
            req.min_x = req.min_x.max(t.min_x + 2);
        }
        req.selected_box = child.selected_box.translate(1, 1);
        req
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.child.set_box(bounds.inset(Insets::all(1)));
        if let Some(title) = &mut self.title {
            title.set_box(Bounds::new(
                bounds.x_min + 1,
                bounds.x_max - 1,
                bounds.y_min,
                bounds.y_min,
            ));
        }
    }

    fn paint(&self, grid: &mut Grid) {
        self.child.paint(grid);
        let b = self.bounds;
        grid.draw_border(b, self.style.charset());
        if let Some(fg) = self.color {
            let edges = [
                Bounds::new(b.x_min, b.x_max, b.y_min, b.y_min),
                Bounds::new(b.x_min, b.x_max, b.y_max, b.y_max),
                Bounds::new(b.x_min, b.x_min, b.y_min, b.y_max),
                Bounds::new(b.x_max, b.x_max, b.y_min, b.y_max),
            ];
            for edge in edges {
                grid.style_rect(edge, |s| s.fg = Some(fg));
            }
        }
        if let Some(title) = &self.title {
            title.paint(grid);
        }
    }

    fn children_mut(&mut self) -> &mut [Element] {
        std::slice::from_mut(&mut self.child)
    }
}

fn bordered(
    child: Element,
    style: BorderStyle,
    color: Option<Color>,
    title: Option<Element>,
) -> Element {
    Element::new(Border {
        child,
        title,
        style,
        color,
        bounds: Bounds::empty(),
    })
}

/// Light single-line frame around the child.
pub fn border(child: Element) -> Element {
    bordered(child, BorderStyle::Light, None, None)
}

pub fn border_light(child: Element) -> Element {
    bordered(child, BorderStyle::Light, None, None)
}

pub fn border_dashed(child: Element) -> Element {
    bordered(child, BorderStyle::Dashed, None, None)
}

pub fn border_heavy(child: Element) -> Element {
    bordered(child, BorderStyle::Heavy, None, None)
}

pub fn border_double(child: Element) -> Element {
    bordered(child, BorderStyle::Double, None, None)
}

pub fn border_rounded(child: Element) -> Element {
    bordered(child, BorderStyle::Rounded, None, None)
}

pub fn border_empty(child: Element) -> Element {
    bordered(child, BorderStyle::Empty, None, None)
}

/// Border drawn with `style` in `color`; the child keeps its own colors.
pub fn border_styled(style: BorderStyle, color: Color) -> impl FnOnce(Element) -> Element {
    move |child| bordered(child, style, Some(color), None)
}

/// A bordered box with `title` drawn over the top edge.
pub fn window(title: Element, content: Element) -> Element {
    bordered(content, BorderStyle::Light, None, Some(title))
}

enum SeparatorGlyph {
    Style(BorderStyle),
    Char(char),
}

struct Separator {
    glyph: SeparatorGlyph,
    bounds: Bounds,
}

impl Node for Separator {
    fn compute_requirement(&mut self) -> Requirement {
        Requirement {
            min_x: 1,
            min_y: 1,
            ..Requirement::default()
        }
    }

    fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn paint(&self, grid: &mut Grid) {
        let b = self.bounds;
        let vertical = b.width() == 1 && b.height() > 1;
        let ch = match self.glyph {
            SeparatorGlyph::Char(ch) => ch,
            SeparatorGlyph::Style(style) => {
                let charset = style.charset();
                if vertical {
                    charset.vertical
                } else {
                    charset.horizontal
                }
            }
        };
        for y in b.y_min..=b.y_max {
            grid.draw_hline(b.x_min, y, b.width(), ch);
        }
    }
}

fn separator_with(glyph: SeparatorGlyph) -> Element {
    Element::new(Separator {
        glyph,
        bounds: Bounds::empty(),
    })
}

/// A line between siblings: vertical inside an `hbox`, horizontal inside a
/// `vbox`, chosen from the box it ends up with.
pub fn separator() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Light))
}

pub fn separator_light() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Light))
}

pub fn separator_dashed() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Dashed))
}

pub fn separator_heavy() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Heavy))
}

pub fn separator_double() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Double))
}

pub fn separator_empty() -> Element {
    separator_with(SeparatorGlyph::Style(BorderStyle::Empty))
}

pub fn separator_char(ch: char) -> Element {
    separator_with(SeparatorGlyph::Char(ch))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/border.rs"]
mod tests;
