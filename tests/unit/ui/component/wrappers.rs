use super::*;
use crate::core::event::{Motion, MouseButton};
use crate::ui::component::container::Container;
use crate::ui::component::tree::ComponentTree;
use crate::ui::core::grid::Grid;
use crate::ui::dom::text;

fn item(name: &'static str) -> Renderer {
    Renderer::focusable(move |_focused, _cx| text(name))
}

fn lines(tree: &mut ComponentTree, width: u16, height: u16) -> Vec<String> {
    let mut grid = Grid::new(width, height);
    tree.render_to(&mut grid);
    grid.to_lines()
}

#[test]
fn renderer_without_children_is_not_focusable() {
    let tree = ComponentTree::new(Renderer::new(|_cx| text("static")));
    assert!(!tree.is_focusable(tree.root()));
}

#[test]
fn renderer_can_wrap_its_children() {
    let mut tree = ComponentTree::new(Renderer::new(|cx| {
        let children = cx.render_children();
        crate::ui::dom::hbox(children)
    }));
    let root = tree.root();
    tree.add_child(root, item("ab")).unwrap();
    tree.add_child(root, item("cd")).unwrap();
    assert_eq!(lines(&mut tree, 5, 1), vec!["abcd "]);
    assert!(tree.is_focusable(root));
}

#[test]
fn focusable_renderer_takes_focus_on_click() {
    let mut tree = ComponentTree::new(Container::horizontal());
    let root = tree.root();
    let a = tree.add_child(root, item("aa")).unwrap();
    let b = tree.add_child(root, item("bb")).unwrap();
    lines(&mut tree, 4, 1);
    assert!(tree.is_focused(a));

    assert!(tree.dispatch(&Event::mouse(MouseButton::Left, Motion::Pressed, 3, 0)));
    assert!(tree.is_focused(b));

    // Only the primary button focuses.
    let right = Event::mouse(MouseButton::Right, Motion::Pressed, 0, 0);
    assert!(!tree.dispatch(&right));
    assert!(tree.is_focused(b));
}

#[test]
fn maybe_hides_and_unfocuses_its_content() {
    let show = Ref::new(true);
    let mut tree = ComponentTree::new(Container::vertical());
    let root = tree.root();
    let first = tree.add_child(root, Maybe::new(show.clone())).unwrap();
    let inner = tree.add_child(first, item("hidden?")).unwrap();
    let other = tree.add_child(root, item("other")).unwrap();

    assert_eq!(lines(&mut tree, 7, 2), vec!["hidden?", "other  "]);
    assert!(tree.is_focused(inner));

    show.set(false);
    assert_eq!(lines(&mut tree, 7, 2), vec!["other  ", "       "]);
    assert!(!tree.is_focusable(first));
    assert!(!tree.take_focus(inner));
    assert!(tree.dispatch(&Event::Special(crate::core::event::Key::ArrowDown)));
    assert!(tree.is_focused(other));
}

#[test]
fn maybe_accepts_a_predicate() {
    let flag = Ref::new(false);
    let seen = flag.clone();
    let mut tree = ComponentTree::new(Maybe::from_fn(move || seen.get()));
    let root = tree.root();
    tree.add_child(root, item("x")).unwrap();
    assert_eq!(lines(&mut tree, 1, 1), vec![" "]);
    flag.set(true);
    assert_eq!(lines(&mut tree, 1, 1), vec!["x"]);
}

#[test]
fn catch_event_can_swallow_keys() {
    let mut tree = ComponentTree::new(CatchEvent::new(|event, _cx| event.is_char('q')));
    let root = tree.root();
    tree.add_child(root, Container::vertical()).unwrap();
    assert!(tree.dispatch(&Event::character('q')));
    assert!(!tree.dispatch(&Event::character('w')));
}

#[test]
fn hoverable_tracks_the_pointer() {
    let hovered = Ref::new(false);
    let mut tree = ComponentTree::new(Container::vertical());
    let root = tree.root();
    let hover = tree.add_child(root, Hoverable::new(hovered.clone())).unwrap();
    tree.add_child(hover, item("over")).unwrap();
    tree.add_child(root, item("away")).unwrap();
    lines(&mut tree, 4, 2);

    tree.dispatch(&Event::mouse(MouseButton::None, Motion::Moved, 1, 0));
    lines(&mut tree, 4, 2);
    assert!(hovered.get());

    tree.dispatch(&Event::mouse(MouseButton::None, Motion::Moved, 1, 1));
    lines(&mut tree, 4, 2);
    assert!(!hovered.get());
}
