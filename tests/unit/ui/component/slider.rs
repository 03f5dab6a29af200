use super::*;
use crate::ui::component::container::Container;
use crate::ui::component::tree::ComponentTree;
use crate::ui::core::grid::Grid;

fn option(value: &Ref<i32>) -> SliderOption<i32> {
    SliderOption::new(value.clone())
        .with_range(0, 100)
        .with_increment(5)
}

fn tree_of<T: SliderValue>(option: SliderOption<T>) -> ComponentTree {
    ComponentTree::new(Slider::new(option))
}

fn key(key: Key) -> Event {
    Event::Special(key)
}

fn paint(tree: &mut ComponentTree, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    tree.render_to(&mut grid);
    grid
}

fn mouse(motion: Motion, x: i32, y: i32) -> Event {
    Event::mouse(MouseButton::Left, motion, x, y)
}

#[test]
fn arrows_step_by_the_increment() {
    let value = Ref::new(50);
    let mut tree = tree_of(option(&value));

    assert!(tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 55);
    assert!(tree.dispatch(&Event::character('h')));
    assert!(tree.dispatch(&key(Key::ArrowLeft)));
    assert_eq!(value.get(), 45);
    assert!(tree.dispatch(&Event::character('l')));
    assert_eq!(value.get(), 50);
}

#[test]
fn horizontal_slider_ignores_vertical_keys() {
    let value = Ref::new(50);
    let mut tree = tree_of(option(&value));
    assert!(!tree.dispatch(&key(Key::ArrowUp)));
    assert!(!tree.dispatch(&Event::character('j')));
    assert_eq!(value.get(), 50);
}

#[test]
fn value_is_clamped_and_unchanged_values_are_not_handled() {
    let value = Ref::new(98);
    let mut tree = tree_of(option(&value));

    assert!(tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 100);
    assert!(!tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 100);
}

#[test]
fn out_of_range_start_is_pulled_back_by_any_key() {
    let value = Ref::new(250);
    let mut tree = tree_of(option(&value));
    assert!(tree.dispatch(&Event::character('x')));
    assert_eq!(value.get(), 100);

    value.set(-7);
    assert!(tree.dispatch(&Event::character('x')));
    assert_eq!(value.get(), 0);
}

#[test]
fn increment_larger_than_the_range_stays_in_bounds() {
    let value = Ref::new(5);
    let mut tree = tree_of(
        SliderOption::new(value.clone())
            .with_range(0, 10)
            .with_increment(50),
    );

    for event in [key(Key::ArrowRight), key(Key::ArrowLeft), key(Key::ArrowRight)] {
        tree.dispatch(&event);
        assert!((0..=10).contains(&value.get()));
    }
    assert_eq!(value.get(), 10);
}

#[test]
fn unsigned_values_saturate_before_clamping() {
    let value = Ref::new(3u8);
    let mut tree = tree_of(
        SliderOption::new(value.clone())
            .with_range(2u8, 10u8)
            .with_increment(5u8),
    );
    assert!(tree.dispatch(&key(Key::ArrowLeft)));
    assert_eq!(value.get(), 2);

    value.set(250);
    tree.dispatch(&key(Key::ArrowRight));
    assert_eq!(value.get(), 10);
}

#[test]
fn float_sliders_step_by_fractions() {
    let value = Ref::new(0.5f32);
    let mut tree = tree_of(
        SliderOption::new(value.clone())
            .with_range(0.0, 1.0)
            .with_increment(0.25),
    );
    assert!(tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 0.75);
    tree.dispatch(&key(Key::ArrowRight));
    tree.dispatch(&key(Key::ArrowRight));
    assert_eq!(value.get(), 1.0);
}

#[test]
fn vertical_arrow_mapping() {
    // Filling upwards: up raises the value.
    let up = Ref::new(50);
    let mut tree = tree_of(option(&up).with_direction(Direction::Up));
    assert!(tree.dispatch(&key(Key::ArrowUp)));
    assert_eq!(up.get(), 55);
    assert!(tree.dispatch(&Event::character('j')));
    assert_eq!(up.get(), 50);
    assert!(!tree.dispatch(&key(Key::ArrowRight)));

    // Filling downwards: down raises the value, up lowers it.
    let down = Ref::new(50);
    let mut tree = tree_of(option(&down).with_direction(Direction::Down));
    assert!(tree.dispatch(&key(Key::ArrowUp)));
    assert_eq!(down.get(), 45);
    assert!(tree.dispatch(&key(Key::ArrowDown)));
    assert!(tree.dispatch(&Event::character('j')));
    assert_eq!(down.get(), 55);
}

#[test]
fn left_filling_slider_reverses_horizontal_keys() {
    let value = Ref::new(50);
    let mut tree = tree_of(option(&value).with_direction(Direction::Left));
    assert!(tree.dispatch(&key(Key::ArrowLeft)));
    assert_eq!(value.get(), 55);
    assert!(tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 50);
}

#[test]
fn dragging_maps_the_pointer_to_the_value() {
    let value = Ref::new(50);
    let mut tree = tree_of(option(&value));
    paint(&mut tree, 11, 1);

    // The press only grabs the mouse.
    assert!(tree.dispatch(&mouse(Motion::Pressed, 0, 0)));
    assert_eq!(value.get(), 50);
    assert_eq!(tree.capture().owner(), Some(tree.root()));

    assert!(tree.dispatch(&mouse(Motion::Moved, 3, 0)));
    assert_eq!(value.get(), 30);
    assert!(tree.dispatch(&mouse(Motion::Moved, 20, 4)));
    assert_eq!(value.get(), 100);

    assert!(tree.dispatch(&mouse(Motion::Released, 20, 4)));
    assert!(!tree.capture().is_captured());

    assert!(!tree.dispatch(&mouse(Motion::Moved, 2, 0)));
    assert_eq!(value.get(), 100);
}

#[test]
fn dragging_respects_the_direction() {
    let left = Ref::new(0);
    let mut tree = tree_of(option(&left).with_direction(Direction::Left));
    paint(&mut tree, 11, 1);
    tree.dispatch(&mouse(Motion::Pressed, 0, 0));
    tree.dispatch(&mouse(Motion::Moved, 2, 0));
    assert_eq!(left.get(), 80);

    let up = Ref::new(0);
    let mut tree = tree_of(option(&up).with_direction(Direction::Up));
    paint(&mut tree, 1, 11);
    tree.dispatch(&mouse(Motion::Pressed, 0, 5));
    tree.dispatch(&mouse(Motion::Moved, 0, 1));
    assert_eq!(up.get(), 90);
}

#[test]
fn press_outside_the_gauge_is_ignored() {
    let value = Ref::new(50);
    let mut tree = ComponentTree::new(Container::vertical());
    let root = tree.root();
    tree.add_child(root, Slider::new(option(&value))).unwrap();
    tree.add_child(root, Container::vertical()).unwrap();
    paint(&mut tree, 10, 2);

    assert!(!tree.dispatch(&mouse(Motion::Pressed, 3, 1)));
    assert!(!tree.capture().is_captured());
}

#[test]
fn clicking_a_slider_focuses_it() {
    let a = Ref::new(10);
    let b = Ref::new(20);
    let mut tree = ComponentTree::new(Container::vertical());
    let root = tree.root();
    let first = tree.add_child(root, Slider::new(option(&a))).unwrap();
    let second = tree.add_child(root, Slider::new(option(&b))).unwrap();
    paint(&mut tree, 10, 2);
    assert!(tree.is_focused(first));

    assert!(tree.dispatch(&mouse(Motion::Pressed, 4, 1)));
    assert!(tree.is_focused(second));
    tree.dispatch(&mouse(Motion::Released, 4, 1));

    // Keys now go to the second slider.
    tree.dispatch(&key(Key::ArrowRight));
    assert_eq!((a.get(), b.get()), (10, 25));
}

#[test]
fn gauge_shows_the_fill_and_focus_color() {
    let value = Ref::new(50);
    let mut tree = tree_of(option(&value));
    let grid = paint(&mut tree, 10, 1);
    assert_eq!(grid.line(0), "█████     ");
    let fg = grid.cell(0, 0).map(|c| c.style.fg);
    assert_eq!(fg, Some(Some(Color::WHITE)));

    tree.dispatch(&Event::FocusLost);
    let grid = paint(&mut tree, 10, 1);
    assert_eq!(grid.cell(0, 0).map(|c| c.style.fg), Some(Some(Color::GRAY_DARK)));
}

#[test]
fn labelled_slider_layout() {
    let value = Ref::new(50);
    let mut tree = ComponentTree::new(slider("Vol:", value.clone(), 0, 100, 10));
    let grid = paint(&mut tree, 16, 1);
    assert_eq!(grid.line(0), "Vol:[█████     ]");

    assert!(tree.dispatch(&key(Key::ArrowRight)));
    assert_eq!(value.get(), 60);
}

#[test]
fn labelled_slider_drags_through_its_gauge() {
    let value = Ref::new(0);
    let mut tree = ComponentTree::new(slider("Vol:", value.clone(), 0, 100, 10));
    paint(&mut tree, 16, 1);

    // On the label: swallowed but no drag starts.
    assert!(tree.dispatch(&mouse(Motion::Pressed, 1, 0)));
    assert!(!tree.capture().is_captured());

    assert!(tree.dispatch(&mouse(Motion::Pressed, 5, 0)));
    assert!(tree.capture().is_captured());
    tree.dispatch(&mouse(Motion::Moved, 10, 0));
    assert_eq!(value.get(), 55);
    tree.dispatch(&mouse(Motion::Released, 10, 0));
    assert!(!tree.capture().is_captured());
}
