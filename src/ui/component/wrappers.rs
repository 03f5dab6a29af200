//! Small components built from closures and bound values.

use super::component::{Component, Focusability};
use super::tree::Cx;
use crate::core::binding::{ConstRef, Ref};
use crate::core::event::Event;
use crate::ui::core::geom::{Bounds, BoundsCell};
use crate::ui::dom::{empty_element, focus, reflect, select, Element};

type RenderFn = Box<dyn FnMut(&mut Cx<'_>) -> Element>;
type FocusedRenderFn = Box<dyn FnMut(bool, &mut Cx<'_>) -> Element>;

enum Render {
    Plain(RenderFn),
    Focusable(FocusedRenderFn),
}

/// Renders through a closure. Children, if any, stay reachable through `cx`.
pub struct Renderer {
    render: Render,
    bounds: BoundsCell,
}

impl Renderer {
    pub fn new(render: impl FnMut(&mut Cx<'_>) -> Element + 'static) -> Self {
        Self {
            render: Render::Plain(Box::new(render)),
            bounds: BoundsCell::new(),
        }
    }

    /// A leaf that can hold focus. The closure receives whether it is
    /// focused; a primary press inside it takes focus.
    pub fn focusable(render: impl FnMut(bool, &mut Cx<'_>) -> Element + 'static) -> Self {
        Self {
            render: Render::Focusable(Box::new(render)),
            bounds: BoundsCell::new(),
        }
    }
}

impl Component for Renderer {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        match &mut self.render {
            Render::Plain(f) => f(cx),
            Render::Focusable(f) => {
                let focused = cx.focused();
                let element = f(focused, cx);
                let element = if focused {
                    focus(element)
                } else if cx.active() {
                    select(element)
                } else {
                    element
                };
                element.pipe(reflect(&self.bounds))
            }
        }
    }

    fn on_event(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        let Render::Focusable(_) = self.render else {
            return false;
        };
        match event.as_mouse() {
            Some(mouse) if mouse.is_primary_press() && self.bounds.contains(mouse.x, mouse.y) => {
                cx.take_focus();
                true
            }
            _ => false,
        }
    }

    fn focusability(&self) -> Focusability {
        match self.render {
            Render::Plain(_) => Focusability::AnyChild,
            Render::Focusable(_) => Focusability::Focusable,
        }
    }

    fn hit_box(&self) -> Option<Bounds> {
        match self.render {
            Render::Plain(_) => None,
            Render::Focusable(_) => Some(self.bounds.get()),
        }
    }
}

type Handler = Box<dyn FnMut(&Event, &mut Cx<'_>) -> bool>;

/// Sees events before its descendants; returning `true` stops them there.
pub struct CatchEvent {
    handler: Handler,
}

impl CatchEvent {
    pub fn new(handler: impl FnMut(&Event, &mut Cx<'_>) -> bool + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl Component for CatchEvent {
    fn on_event_capture(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        (self.handler)(event, cx)
    }
}

/// Shows its children only while `show` holds. Hidden, it renders nothing
/// and cannot take focus.
pub struct Maybe {
    show: ConstRef<bool>,
}

impl Maybe {
    pub fn new(show: impl Into<ConstRef<bool>>) -> Self {
        Self { show: show.into() }
    }

    pub fn from_fn(show: impl Fn() -> bool + 'static) -> Self {
        Self {
            show: ConstRef::from_fn(show),
        }
    }
}

impl Component for Maybe {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        if self.show.get() {
            cx.render_active_child()
        } else {
            empty_element()
        }
    }

    fn focusability(&self) -> Focusability {
        if self.show.get() {
            Focusability::AnyChild
        } else {
            Focusability::Unfocusable
        }
    }
}

/// Writes whether the pointer is over its content into `hovered`. The
/// state is refreshed on every render from the last painted box.
pub struct Hoverable {
    hovered: Ref<bool>,
    bounds: BoundsCell,
}

impl Hoverable {
    pub fn new(hovered: Ref<bool>) -> Self {
        Self {
            hovered,
            bounds: BoundsCell::new(),
        }
    }
}

impl Component for Hoverable {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        let over = cx
            .pointer()
            .is_some_and(|p| self.bounds.get().contains_pos(p));
        let hovered = over && cx.can_capture_mouse();
        if self.hovered.get() != hovered {
            self.hovered.set(hovered);
        }
        cx.render_active_child().pipe(reflect(&self.bounds))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/component/wrappers.rs"]
mod tests;
