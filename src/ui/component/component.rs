use super::tree::Cx;
use crate::core::binding::Ref;
use crate::core::event::Event;
use crate::ui::animation::Params;
use crate::ui::core::geom::Bounds;
use crate::ui::dom::Element;

/// How a component takes part in keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focusability {
    Focusable,
    Unfocusable,
    /// Focusable when any child is.
    #[default]
    AnyChild,
    /// Focusable when the active child is.
    ActiveChild,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FocusState {
    Unfocusable,
    Inactive,
    /// The parent's active child, without the whole path being focused.
    Active,
    /// The single component keyboard input is aimed at.
    Focused,
}

/// A node of the interactive tree. Children live in the
/// [`ComponentTree`](super::ComponentTree); a component reaches them, and the
/// tree's focus, capture and animation state, through its [`Cx`].
pub trait Component {
    /// Builds this frame's presentation. Defaults to the active child, or
    /// the first one.
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        cx.render_active_child()
    }

    /// Bubble phase: called after the active descendants declined the event.
    fn on_event(&mut self, _event: &Event, _cx: &mut Cx<'_>) -> bool {
        false
    }

    /// Capture phase: called root-first, before any descendant sees the event.
    fn on_event_capture(&mut self, _event: &Event, _cx: &mut Cx<'_>) -> bool {
        false
    }

    fn focusability(&self) -> Focusability {
        Focusability::AnyChild
    }

    /// Shared index of the active child, for components that let the caller
    /// observe or drive their selection. Queried once, when the component is
    /// inserted.
    fn selector(&self) -> Option<Ref<i32>> {
        None
    }

    /// Box that receives pointer events, as painted in the last frame.
    fn hit_box(&self) -> Option<Bounds> {
        None
    }

    fn on_animation(&mut self, _params: &Params, _cx: &mut Cx<'_>) {}
}
