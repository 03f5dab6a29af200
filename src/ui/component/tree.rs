//! The interactive tree: an arena of components with focus, capture and
//! animation state, plus event routing.

use std::fmt;
use std::time::Duration;

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};

use super::capture::{CaptureArbiter, CapturedMouse};
use super::component::{Component, FocusState, Focusability};
use crate::core::binding::Ref;
use crate::core::event::{Event, Motion, Mouse};
use crate::ui::animation::{AnimationScheduler, Animator, FrameRequester, Params};
use crate::ui::core::geom::Pos;
use crate::ui::core::grid::Grid;
use crate::ui::dom::{empty_element, Element};

new_key_type! { pub struct ComponentId; }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    InvalidId,
    DetachRoot,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidId => write!(f, "invalid component id"),
            TreeError::DetachRoot => write!(f, "cannot detach the root component"),
        }
    }
}

impl std::error::Error for TreeError {}

struct NodeEntry {
    /// `None` while the component runs a callback.
    component: Option<Box<dyn Component>>,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
    active: Option<usize>,
    selector: Option<Ref<i32>>,
    focusability: Focusability,
    enabled: bool,
    /// Position in the last render pass; `None` when not rendered.
    render_order: Option<u32>,
}

impl NodeEntry {
    fn new(component: Box<dyn Component>, parent: Option<ComponentId>) -> Self {
        Self {
            selector: component.selector(),
            focusability: component.focusability(),
            component: Some(component),
            parent,
            children: Vec::new(),
            active: None,
            enabled: true,
            render_order: None,
        }
    }
}

pub struct ComponentTree {
    nodes: SlotMap<ComponentId, NodeEntry>,
    root: ComponentId,
    capture: CaptureArbiter,
    animations: AnimationScheduler<ComponentId>,
    frames: FrameRequester,
    focused: bool,
    pointer: Option<Pos>,
    render_counter: u32,
}

impl ComponentTree {
    pub fn new(root: impl Component + 'static) -> Self {
        Self::with_frames(root, FrameRequester::new())
    }

    /// Uses `frames` for every redraw request the tree raises.
    pub fn with_frames(root: impl Component + 'static, frames: FrameRequester) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeEntry::new(Box::new(root), None));
        Self {
            nodes,
            root,
            capture: CaptureArbiter::new(),
            animations: AnimationScheduler::new(frames.clone()),
            frames,
            focused: true,
            pointer: None,
            render_counter: 0,
        }
    }

    pub fn root(&self) -> ComponentId {
        self.root
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes.get(id)?.parent
    }

    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn frames(&self) -> &FrameRequester {
        &self.frames
    }

    pub fn capture(&self) -> &CaptureArbiter {
        &self.capture
    }

    pub fn animations(&self) -> &AnimationScheduler<ComponentId> {
        &self.animations
    }

    /// Last pointer position seen in a mouse event.
    pub fn pointer(&self) -> Option<Pos> {
        self.pointer
    }

    pub fn add_child(
        &mut self,
        parent: ComponentId,
        component: impl Component + 'static,
    ) -> Result<ComponentId, TreeError> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::InvalidId);
        }
        let id = self
            .nodes
            .insert(NodeEntry::new(Box::new(component), Some(parent)));
        self.nodes[parent].children.push(id);
        self.frames.request();
        Ok(id)
    }

    /// Removes `id` and its subtree. Their animations stop and a capture held
    /// by any of them is released.
    pub fn detach(&mut self, id: ComponentId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::DetachRoot);
        }
        let parent = self.nodes.get(id).ok_or(TreeError::InvalidId)?.parent;
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p)) {
            if let Some(index) = parent.children.iter().position(|&c| c == id) {
                parent.children.remove(index);
                if let Some(active) = parent.active {
                    if index < active {
                        parent.active = Some(active - 1);
                    }
                }
                if let Some(selector) = &parent.selector {
                    selector.update(|s| {
                        if (index as i32) < *s {
                            *s -= 1;
                        }
                    });
                }
            }
        }
        let victims = self.subtree(id);
        for &victim in &victims {
            self.animations.cancel_owner(victim);
            if self.capture.owner() == Some(victim) {
                self.capture.force_release();
            }
            self.nodes.remove(victim);
        }
        tracing::debug!(?id, removed = victims.len(), "component detached");
        self.frames.request();
        Ok(())
    }

    /// Disabled components are skipped by focus and event routing.
    pub fn set_enabled(&mut self, id: ComponentId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.enabled = enabled;
            self.frames.request();
        }
    }

    pub fn is_enabled(&self, id: ComponentId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.enabled)
    }

    /// Runs `f` against the component behind `id`. `None` when the id is
    /// gone or the component is already running.
    pub fn with_component<R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut dyn Component, &mut Cx<'_>) -> R,
    ) -> Option<R> {
        let mut component = self.nodes.get_mut(id)?.component.take()?;
        let out = f(component.as_mut(), &mut Cx { tree: self, id });
        // The callback may have detached its own node.
        if let Some(node) = self.nodes.get_mut(id) {
            node.focusability = component.focusability();
            node.component = Some(component);
        }
        Some(out)
    }

    fn refresh_caches(&mut self) {
        for node in self.nodes.values_mut() {
            if let Some(component) = &node.component {
                node.focusability = component.focusability();
            }
        }
    }

    /// `id` followed by its descendants, depth-first.
    fn subtree(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.nodes.get(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// `id` first, root last.
    fn ancestors(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(next) = cur {
            out.push(next);
            cur = self.parent(next);
        }
        out
    }

    pub fn is_focusable(&self, id: ComponentId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if !node.enabled {
            return false;
        }
        match node.focusability {
            Focusability::Focusable => true,
            Focusability::Unfocusable => false,
            Focusability::AnyChild => node.children.iter().any(|&c| self.is_focusable(c)),
            Focusability::ActiveChild => self
                .active_child(id)
                .is_some_and(|c| self.is_focusable(c)),
        }
    }

    /// The child `id` designates for focus: its selector or stored index,
    /// clamped to the children, otherwise the first focusable child.
    pub fn active_child(&self, id: ComponentId) -> Option<ComponentId> {
        let node = self.nodes.get(id)?;
        let last = node.children.len().checked_sub(1)?;
        let index = if let Some(selector) = &node.selector {
            selector.get().clamp(0, last as i32) as usize
        } else if let Some(active) = node.active {
            active.min(last)
        } else {
            return node
                .children
                .iter()
                .copied()
                .find(|&c| self.is_focusable(c));
        };
        Some(node.children[index])
    }

    fn set_active_index(&mut self, parent: ComponentId, index: usize) {
        if let Some(node) = self.nodes.get_mut(parent) {
            match &node.selector {
                Some(selector) => selector.set(index as i32),
                None => node.active = Some(index),
            }
        }
    }

    /// Makes `child` the active child of its parent. Returns `false` when
    /// `child` is not a child of `parent`.
    pub fn set_active_child(&mut self, parent: ComponentId, child: ComponentId) -> bool {
        let Some(index) = self.children(parent).iter().position(|&c| c == child) else {
            return false;
        };
        self.set_active_index(parent, index);
        self.frames.request();
        true
    }

    fn is_active(&self, id: ComponentId) -> bool {
        match self.parent(id) {
            None => self.contains(id),
            Some(parent) => self.active_child(parent) == Some(id),
        }
    }

    /// Root, then active children for as long as they are focusable.
    pub fn active_path(&self) -> Vec<ComponentId> {
        let mut path = vec![self.root];
        let mut cur = self.root;
        while self.is_focusable(cur) {
            match self.active_child(cur) {
                Some(next) if self.is_focusable(next) => {
                    path.push(next);
                    cur = next;
                }
                _ => break,
            }
        }
        path
    }

    /// The one component keyboard input is aimed at.
    pub fn focused_leaf(&self) -> Option<ComponentId> {
        if !self.focused {
            return None;
        }
        self.active_path()
            .last()
            .copied()
            .filter(|&id| self.is_focusable(id))
    }

    pub fn focus_state(&self, id: ComponentId) -> FocusState {
        if !self.is_focusable(id) {
            FocusState::Unfocusable
        } else if self.focused_leaf() == Some(id) {
            FocusState::Focused
        } else if self.is_active(id) {
            FocusState::Active
        } else {
            FocusState::Inactive
        }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus_state(id) == FocusState::Focused
    }

    /// `id` is the focused leaf or one of its ancestors.
    pub fn within_focus(&self, id: ComponentId) -> bool {
        self.focused && self.is_focusable(id) && self.active_path().contains(&id)
    }

    /// No ancestor of `id` is disabled or hides its children from focus.
    fn is_reachable(&self, id: ComponentId) -> bool {
        self.ancestors(id).into_iter().skip(1).all(|a| {
            self.nodes
                .get(a)
                .is_some_and(|n| n.enabled && n.focusability != Focusability::Unfocusable)
        })
    }

    /// Makes `id` the active child at every level up to the root. A no-op
    /// returning `false` for components that cannot take focus.
    pub fn take_focus(&mut self, id: ComponentId) -> bool {
        self.refresh_caches();
        if !self.is_focusable(id) || !self.is_reachable(id) {
            tracing::trace!(?id, "focus request ignored");
            return false;
        }
        let mut child = id;
        while let Some(parent) = self.parent(child) {
            if let Some(index) = self.children(parent).iter().position(|&c| c == child) {
                self.set_active_index(parent, index);
            }
            child = parent;
        }
        tracing::debug!(?id, "focus taken");
        self.frames.request();
        true
    }

    /// Terminal focus. While unfocused no component is `Focused`.
    pub fn set_tree_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.frames.request();
        }
    }

    pub fn is_tree_focused(&self) -> bool {
        self.focused
    }

    fn render_node(&mut self, id: ComponentId) -> Element {
        let Some(node) = self.nodes.get_mut(id) else {
            return empty_element();
        };
        node.render_order = Some(self.render_counter);
        self.render_counter += 1;
        self.with_component(id, |c, cx| c.render(cx))
            .unwrap_or_else(empty_element)
    }

    /// Builds this frame's element tree.
    pub fn render(&mut self) -> Element {
        self.refresh_caches();
        for node in self.nodes.values_mut() {
            node.render_order = None;
        }
        self.render_counter = 0;
        self.render_node(self.root)
    }

    /// Renders and paints into `grid`, replacing its content.
    pub fn render_to(&mut self, grid: &mut Grid) {
        grid.clear();
        let mut element = self.render();
        element.render(grid);
    }

    fn call(&mut self, id: ComponentId, f: impl FnOnce(&mut dyn Component, &mut Cx<'_>) -> bool) -> bool {
        self.with_component(id, f).unwrap_or(false)
    }

    /// Routes one event. A handled event requests a frame.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        self.refresh_caches();
        let handled = match event {
            Event::FocusGained => {
                self.set_tree_focused(true);
                true
            }
            Event::FocusLost => {
                self.set_tree_focused(false);
                true
            }
            Event::Mouse(mouse) => self.dispatch_mouse(event, mouse),
            _ => self.dispatch_keyboard(event),
        };
        if handled {
            self.frames.request();
        }
        handled
    }

    fn dispatch_keyboard(&mut self, event: &Event) -> bool {
        let path = self.active_path();
        for &id in &path {
            if self.call(id, |c, cx| c.on_event_capture(event, cx)) {
                tracing::trace!(?id, ?event, "event captured");
                return true;
            }
        }
        for &id in path.iter().rev() {
            if self.call(id, |c, cx| c.on_event(event, cx)) {
                tracing::trace!(?id, ?event, "event handled");
                return true;
            }
        }
        false
    }

    /// Rendered, enabled components whose hit box contains `pos`, topmost
    /// first.
    fn hits(&self, pos: Pos) -> Vec<ComponentId> {
        let mut hits: Vec<(u32, ComponentId)> = self
            .nodes
            .iter()
            .filter_map(|(id, node)| {
                let order = node.render_order?;
                if !node.enabled {
                    return None;
                }
                let hit_box = node.component.as_ref()?.hit_box()?;
                hit_box.contains_pos(pos).then_some((order, id))
            })
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    fn dispatch_mouse(&mut self, event: &Event, mouse: &Mouse) -> bool {
        let pos = Pos::new(mouse.x, mouse.y);
        if self.pointer != Some(pos) {
            self.pointer = Some(pos);
            self.frames.request();
        }

        if let Some(owner) = self.capture.owner() {
            if self.contains(owner) {
                let handled = self.call(owner, |c, cx| c.on_event(event, cx));
                if mouse.motion == Motion::Released && self.capture.owner() == Some(owner) {
                    tracing::warn!(?owner, "mouse capture kept past button release");
                    self.capture.force_release();
                }
                return handled;
            }
            tracing::warn!(?owner, "mouse capture held by a detached component");
            self.capture.force_release();
        }

        let hits = self.hits(pos);
        let target = hits.first().copied().unwrap_or(self.root);
        let ancestors = self.ancestors(target);
        for &id in ancestors.iter().rev() {
            if self.call(id, |c, cx| c.on_event_capture(event, cx)) {
                return true;
            }
        }
        let mut offered = FxHashSet::default();
        for &id in hits.iter().chain(ancestors.iter()) {
            if offered.insert(id) && self.call(id, |c, cx| c.on_event(event, cx)) {
                tracing::trace!(?id, ?event, "mouse event handled");
                return true;
            }
        }
        false
    }

    /// Fans one animation step out to every component, then advances the
    /// running animators. Returns whether any are still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let params = Params::new(dt);
        for id in self.subtree(self.root) {
            self.with_component(id, |c, cx| c.on_animation(&params, cx));
        }
        self.animations.tick(dt)
    }
}

/// A component's window onto the tree while one of its callbacks runs.
pub struct Cx<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
}

impl Cx<'_> {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn children(&self) -> Vec<ComponentId> {
        self.tree.children(self.id).to_vec()
    }

    pub fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }

    pub fn active_child(&self) -> Option<ComponentId> {
        self.tree.active_child(self.id)
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_child()?;
        self.tree.children(self.id).iter().position(|&c| c == active)
    }

    pub fn set_active_child(&mut self, child: ComponentId) -> bool {
        self.tree.set_active_child(self.id, child)
    }

    pub fn is_focusable(&self, id: ComponentId) -> bool {
        self.tree.is_focusable(id)
    }

    pub fn focus_state(&self) -> FocusState {
        self.tree.focus_state(self.id)
    }

    pub fn focused(&self) -> bool {
        self.focus_state() == FocusState::Focused
    }

    pub fn active(&self) -> bool {
        self.tree.is_active(self.id)
    }

    pub fn within_focus(&self) -> bool {
        self.tree.within_focus(self.id)
    }

    pub fn take_focus(&mut self) -> bool {
        self.tree.take_focus(self.id)
    }

    pub fn capture_mouse(&mut self) -> Option<CapturedMouse> {
        self.tree.capture.try_capture(self.id)
    }

    pub fn can_capture_mouse(&self) -> bool {
        !self.tree.capture.is_captured()
    }

    pub fn render_child(&mut self, child: ComponentId) -> Element {
        self.tree.render_node(child)
    }

    pub fn render_children(&mut self) -> Vec<Element> {
        self.children()
            .into_iter()
            .map(|c| self.tree.render_node(c))
            .collect()
    }

    /// The active child's element, or the first child's, or nothing.
    pub fn render_active_child(&mut self) -> Element {
        let child = self
            .active_child()
            .or_else(|| self.tree.children(self.id).first().copied());
        match child {
            Some(child) => self.tree.render_node(child),
            None => empty_element(),
        }
    }

    pub fn add_child(&mut self, component: impl Component + 'static) -> ComponentId {
        let id = self
            .tree
            .nodes
            .insert(NodeEntry::new(Box::new(component), Some(self.id)));
        if let Some(node) = self.tree.nodes.get_mut(self.id) {
            node.children.push(id);
        }
        id
    }

    pub fn detach(&mut self, child: ComponentId) -> Result<(), TreeError> {
        self.tree.detach(child)
    }

    pub fn request_frame(&self) {
        self.tree.frames.request();
    }

    /// Starts `animator`; it is cancelled if this component is detached.
    pub fn animate(&mut self, animator: Animator) {
        self.tree.animations.add(self.id, animator);
    }

    pub fn pointer(&self) -> Option<Pos> {
        self.tree.pointer
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/component/tree.rs"]
mod tests;
