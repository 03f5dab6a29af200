use super::*;
use crate::ui::dom::container::{hbox, vbox};
use crate::ui::dom::text::text;

fn render(mut root: Element, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    root.render(&mut grid);
    grid
}

#[test]
fn border_adds_one_cell_on_each_side() {
    let mut e = border(text("hi"));
    let req = e.compute_requirement();
    assert_eq!((req.min_x, req.min_y), (4, 3));

    let grid = render(border(text("hi")), 4, 3);
    assert_eq!(grid.to_lines(), vec!["┌──┐", "│hi│", "└──┘"]);
}

#[test]
fn border_variants_use_their_charset() {
    let grid = render(border_double(text("x")), 3, 3);
    assert_eq!(grid.to_lines(), vec!["╔═╗", "║x║", "╚═╝"]);

    let grid = render(border_rounded(text("x")), 3, 3);
    assert_eq!(grid.line(0), "╭─╮");

    let grid = render(border_empty(text("x")), 3, 3);
    assert_eq!(grid.line(1), " x ");
}

#[test]
fn styled_border_colors_only_the_edges() {
    let grid = render(text("x").pipe(border_styled(BorderStyle::Heavy, Color::RED)), 3, 3);
    let fg = |x, y| grid.cell(x, y).and_then(|c| c.style.fg);
    assert_eq!(grid.line(0), "┏━┓");
    assert_eq!(fg(0, 0), Some(Color::RED));
    assert_eq!(fg(2, 1), Some(Color::RED));
    assert_eq!(fg(1, 1), None);
}

#[test]
fn window_draws_the_title_over_the_top_edge() {
    let mut e = window(text("a long title"), text("x"));
    assert_eq!(e.compute_requirement().min_x, 14);

    let grid = render(window(text("T"), text("body")), 6, 3);
    assert_eq!(grid.to_lines(), vec!["┌T───┐", "│body│", "└────┘"]);
}

#[test]
fn border_shifts_the_selected_box() {
    use crate::ui::dom::decorator::focus;
    let mut e = border(text("ab").pipe(focus));
    let req = e.compute_requirement();
    assert_eq!(req.selected_box, Bounds::new(1, 2, 1, 1));
}

#[test]
fn separator_orientation_follows_its_box() {
    let grid = render(hbox(vec![text("a"), separator(), text("b")]), 3, 2);
    assert_eq!(grid.to_lines(), vec!["a│b", " │ "]);

    let grid = render(vbox(vec![text("ab"), separator_heavy(), text("cd")]), 2, 3);
    assert_eq!(grid.to_lines(), vec!["ab", "━━", "cd"]);
}

#[test]
fn custom_separator_char() {
    let grid = render(vbox(vec![separator_char('=')]), 3, 1);
    assert_eq!(grid.line(0), "===");
}
