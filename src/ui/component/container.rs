use super::component::{Component, Focusability};
use super::tree::Cx;
use crate::core::binding::Ref;
use crate::core::event::{Event, Key, MouseButton};
use crate::ui::core::geom::{Bounds, BoundsCell};
use crate::ui::dom::{dbox, hbox, reflect, text, vbox, Element};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// Children stacked top to bottom, navigated with up/down.
    Vertical,
    /// Children side by side, navigated with left/right.
    Horizontal,
    /// Only the selected child is shown.
    Tab,
    /// Children overlap; the selected one is drawn on top.
    Stacked,
}

/// Groups children and moves the active child in response to navigation keys.
pub struct Container {
    kind: ContainerKind,
    selector: Ref<i32>,
    bounds: BoundsCell,
}

impl Container {
    fn with_kind(kind: ContainerKind, selector: Ref<i32>) -> Self {
        Self {
            kind,
            selector,
            bounds: BoundsCell::new(),
        }
    }

    pub fn vertical() -> Self {
        Self::vertical_with(Ref::new(0))
    }

    /// Vertical container whose selection is shared with the caller.
    pub fn vertical_with(selector: Ref<i32>) -> Self {
        Self::with_kind(ContainerKind::Vertical, selector)
    }

    pub fn horizontal() -> Self {
        Self::horizontal_with(Ref::new(0))
    }

    pub fn horizontal_with(selector: Ref<i32>) -> Self {
        Self::with_kind(ContainerKind::Horizontal, selector)
    }

    pub fn tab(selector: Ref<i32>) -> Self {
        Self::with_kind(ContainerKind::Tab, selector)
    }

    pub fn stacked() -> Self {
        Self::with_kind(ContainerKind::Stacked, Ref::new(0))
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Box painted in the last frame.
    pub fn bounds(&self) -> Bounds {
        self.bounds.get()
    }

    /// Moves to the next focusable child in `dir`, staying put at the ends.
    fn move_selector(&self, dir: i32, cx: &Cx<'_>) {
        let children = cx.children();
        let mut i = self.selector.get() + dir;
        while i >= 0 && (i as usize) < children.len() {
            if cx.is_focusable(children[i as usize]) {
                self.selector.set(i);
                return;
            }
            i += dir;
        }
    }

    /// Like `move_selector`, wrapping around the ends.
    fn move_selector_wrap(&self, dir: i32, cx: &Cx<'_>) {
        let children = cx.children();
        let len = children.len() as i32;
        for offset in 1..len {
            let i = (self.selector.get() + offset * dir).rem_euclid(len);
            if cx.is_focusable(children[i as usize]) {
                self.selector.set(i);
                return;
            }
        }
    }

    fn clamp_selector(&self, cx: &Cx<'_>) {
        let last = cx.child_count() as i32 - 1;
        self.selector.update(|s| *s = (*s).min(last).max(0));
    }

    fn navigate(&self, event: &Event, cx: &Cx<'_>) {
        let len = cx.child_count();
        match self.kind {
            ContainerKind::Vertical => {
                if event.is_key(Key::ArrowUp) || event.is_char('k') {
                    self.move_selector(-1, cx);
                }
                if event.is_key(Key::ArrowDown) || event.is_char('j') {
                    self.move_selector(1, cx);
                }
                let page = self.bounds.get().height() - 1;
                if event.is_key(Key::PageUp) {
                    (0..page).for_each(|_| self.move_selector(-1, cx));
                }
                if event.is_key(Key::PageDown) {
                    (0..page).for_each(|_| self.move_selector(1, cx));
                }
                if event.is_key(Key::Home) {
                    (0..len).for_each(|_| self.move_selector(-1, cx));
                }
                if event.is_key(Key::End) {
                    (0..len).for_each(|_| self.move_selector(1, cx));
                }
            }
            ContainerKind::Horizontal => {
                if event.is_key(Key::ArrowLeft) || event.is_char('h') {
                    self.move_selector(-1, cx);
                }
                if event.is_key(Key::ArrowRight) || event.is_char('l') {
                    self.move_selector(1, cx);
                }
            }
            ContainerKind::Tab | ContainerKind::Stacked => return,
        }
        if event.is_key(Key::Tab) {
            self.move_selector_wrap(1, cx);
        }
        if event.is_key(Key::TabReverse) {
            self.move_selector_wrap(-1, cx);
        }
    }

    fn on_wheel(&self, event: &Event, cx: &Cx<'_>) -> bool {
        let Some(mouse) = event.as_mouse() else {
            return false;
        };
        if self.kind != ContainerKind::Vertical
            || !matches!(mouse.button, MouseButton::WheelUp | MouseButton::WheelDown)
            || !self.bounds.contains(mouse.x, mouse.y)
        {
            return false;
        }
        let dir = if mouse.button == MouseButton::WheelUp { -1 } else { 1 };
        self.move_selector(dir, cx);
        self.clamp_selector(cx);
        true
    }
}

impl Component for Container {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        if cx.child_count() == 0 {
            return text("Empty container").pipe(reflect(&self.bounds));
        }
        let element = match self.kind {
            ContainerKind::Vertical => vbox(cx.render_children()),
            ContainerKind::Horizontal => hbox(cx.render_children()),
            ContainerKind::Tab => cx.render_active_child(),
            ContainerKind::Stacked => {
                let active = cx.active_child();
                let mut layers: Vec<Element> = cx
                    .children()
                    .into_iter()
                    .rev()
                    .filter(|&c| Some(c) != active)
                    .map(|c| cx.render_child(c))
                    .collect();
                if let Some(active) = active {
                    layers.push(cx.render_child(active));
                }
                dbox(layers)
            }
        };
        element.pipe(reflect(&self.bounds))
    }

    fn on_event(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        if event.is_mouse() {
            return self.on_wheel(event, cx);
        }
        if cx.child_count() == 0 {
            return false;
        }
        let before = self.selector.get();
        self.navigate(event, cx);
        self.clamp_selector(cx);
        before != self.selector.get()
    }

    fn focusability(&self) -> Focusability {
        match self.kind {
            ContainerKind::Vertical | ContainerKind::Horizontal => Focusability::AnyChild,
            ContainerKind::Tab | ContainerKind::Stacked => Focusability::ActiveChild,
        }
    }

    fn selector(&self) -> Option<Ref<i32>> {
        Some(self.selector.clone())
    }

    fn hit_box(&self) -> Option<Bounds> {
        match self.kind {
            ContainerKind::Vertical => Some(self.bounds.get()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/component/container.rs"]
mod tests;
