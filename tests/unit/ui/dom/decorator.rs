use super::*;
use crate::ui::dom::container::dbox;
use crate::ui::dom::text::text;

fn render(mut root: Element, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    root.render(&mut grid);
    grid
}

fn style_at(grid: &Grid, x: i32, y: i32) -> Style {
    grid.cell(x, y).map(|c| c.style).unwrap_or_default()
}

#[test]
fn style_decorators_only_touch_the_child_box() {
    let grid = render(hbox(vec![text("ab").pipe(bold), text("c")]), 4, 1);
    assert!(style_at(&grid, 0, 0).mods.contains(Mod::BOLD));
    assert!(style_at(&grid, 1, 0).mods.contains(Mod::BOLD));
    assert!(!style_at(&grid, 2, 0).mods.contains(Mod::BOLD));
}

#[test]
fn inverting_twice_cancels() {
    let once = render(text("a").pipe(inverted), 1, 1);
    assert!(style_at(&once, 0, 0).mods.contains(Mod::REVERSE));

    let twice = render(text("a").pipe(inverted).pipe(inverted), 1, 1);
    assert!(!style_at(&twice, 0, 0).mods.contains(Mod::REVERSE));
}

#[test]
fn colors_are_applied() {
    let e = text("a").pipe(color(Color::RED)).pipe(bgcolor(Color::BLUE));
    let grid = render(e, 1, 1);
    let style = style_at(&grid, 0, 0);
    assert_eq!(style.fg, Some(Color::RED));
    assert_eq!(style.bg, Some(Color::BLUE));
}

#[test]
fn flex_decorators_set_and_clear_factors() {
    let mut e = text("a").pipe(xflex);
    let req = e.compute_requirement();
    assert_eq!((req.flex_grow_x, req.flex_shrink_x, req.flex_grow_y), (1, 1, 0));

    let mut e = text("a").pipe(flex).pipe(notflex);
    let req = e.compute_requirement();
    assert_eq!(
        (req.flex_grow_x, req.flex_grow_y, req.flex_shrink_x, req.flex_shrink_y),
        (0, 0, 0, 0)
    );

    let mut e = text("a").pipe(yflex_grow);
    let req = e.compute_requirement();
    assert_eq!((req.flex_grow_y, req.flex_shrink_y), (1, 0));
}

#[test]
fn size_constraints() {
    let grid = render(
        hbox(vec![
            text("abcdef").pipe(size(WidthOrHeight::Width, Constraint::Equal, 3)),
            text("x"),
        ]),
        5,
        1,
    );
    assert_eq!(grid.line(0), "abcx ");

    let mut e = text("ab").pipe(size(WidthOrHeight::Width, Constraint::GreaterThan, 6));
    assert_eq!(e.compute_requirement().min_x, 6);

    let mut e = text("abcd").pipe(size(WidthOrHeight::Width, Constraint::LessThan, 2));
    assert_eq!(e.compute_requirement().min_x, 2);

    let mut e = text("a")
        .pipe(flex)
        .pipe(size(WidthOrHeight::Height, Constraint::Equal, 4));
    let req = e.compute_requirement();
    assert_eq!((req.min_y, req.flex_grow_y, req.flex_grow_x), (4, 0, 1));
}

#[test]
fn alignment_helpers() {
    let grid = render(align_right(text("ab")), 5, 1);
    assert_eq!(grid.line(0), "   ab");

    let grid = render(center(text("ab")), 6, 3);
    assert_eq!(grid.to_lines(), vec!["      ", "  ab  ", "      "]);
}

#[test]
fn focus_and_select_mark_the_whole_child() {
    let mut e = text("abc").pipe(select);
    let req = e.compute_requirement();
    assert_eq!(req.selection, Selection::Selected);
    assert_eq!(req.selected_box, Bounds::new(0, 2, 0, 0));

    let mut e = text("abc").pipe(focus_position(1, 0));
    let req = e.compute_requirement();
    assert_eq!(req.selection, Selection::Focused);
    assert_eq!(req.selected_box, Bounds::new(1, 1, 0, 0));
}

#[test]
fn focus_cursor_places_the_cursor_at_the_top_left() {
    let grid = render(
        hbox(vec![text("ab"), text("c").pipe(focus_cursor_bar)]),
        4,
        1,
    );
    assert_eq!(
        grid.cursor(),
        Some(Cursor {
            x: 2,
            y: 0,
            shape: CursorShape::Bar,
        })
    );
}

#[test]
fn cursor_outside_the_stencil_is_ignored() {
    let grid = render(
        hbox(vec![text("abcd"), text("e").pipe(focus_cursor_block)]),
        4,
        1,
    );
    assert_eq!(grid.cursor(), None);
}

#[test]
fn reflect_reports_the_visible_box() {
    let cell = BoundsCell::new();
    render(hbox(vec![text("abc"), text("defg").pipe(reflect(&cell))]), 5, 1);
    assert_eq!(cell.get(), Bounds::new(3, 4, 0, 0));
}

#[test]
fn clear_under_blanks_what_is_beneath() {
    let grid = render(dbox(vec![text("xxxx"), text("ab").pipe(clear_under)]), 4, 1);
    assert_eq!(grid.line(0), "ab  ");
}

#[test]
fn nothing_is_identity() {
    let grid = render(text("ab").pipe(nothing), 2, 1);
    assert_eq!(grid.line(0), "ab");
}
