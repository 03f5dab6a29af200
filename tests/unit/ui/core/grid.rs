use super::*;
use crate::ui::core::style::{Color, Mod};

#[test]
fn draw_text_writes_one_cell_per_column() {
    let mut grid = Grid::new(6, 1);
    let end = grid.draw_text(0, 0, "a日b");
    assert_eq!(end, 4);
    assert_eq!(grid.cell(1, 0).unwrap().symbol, "日");
    assert_eq!(grid.cell(1, 0).unwrap().width, 2);
    assert!(grid.cell(2, 0).unwrap().is_placeholder());
    assert_eq!(grid.line(0), "a日b  ");
}

#[test]
fn draw_text_skips_wide_glyphs_that_do_not_fit() {
    let mut grid = Grid::new(1, 1);
    grid.draw_text(0, 0, "日");
    assert_eq!(grid.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn writes_outside_the_stencil_are_dropped() {
    let mut grid = Grid::new(4, 2);
    grid.with_stencil(Bounds::new(1, 2, 0, 0), |g| {
        g.draw_text(0, 0, "abcd");
        g.draw_text(0, 1, "wxyz");
    });
    assert_eq!(grid.to_lines(), vec![" bc ", "    "]);
    assert_eq!(grid.stencil(), grid.bounds());
}

#[test]
fn malformed_text_shows_a_placeholder() {
    let mut grid = Grid::new(3, 1);
    let text = String::from_utf8_lossy(&[b'a', 0xFF, b'b']).into_owned();
    grid.draw_text(0, 0, &text);
    assert_eq!(grid.line(0), "a\u{FFFD}b");
}

#[test]
fn fill_rect_clips_to_grid() {
    let mut grid = Grid::new(2, 2);
    grid.draw_text(0, 0, "AB");
    let style = Style::default().bg(Color::BLUE);
    grid.fill_rect(Bounds::new(-5, 10, -5, 10), style);
    assert_eq!(grid.cell(0, 0).unwrap().symbol, " ");
    assert_eq!(grid.cell(1, 1).unwrap().style, style);
}

#[test]
fn style_rect_preserves_existing_symbols() {
    let mut grid = Grid::new(1, 1);
    grid.draw_text(0, 0, "A");
    grid.style_rect(grid.bounds(), |s| s.mods |= Mod::BOLD);
    let cell = grid.cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "A");
    assert!(cell.style.mods.contains(Mod::BOLD));
}

#[test]
fn border_frames_the_box() {
    let mut grid = Grid::new(4, 3);
    grid.draw_border(grid.bounds(), BorderStyle::Rounded.charset());
    assert_eq!(grid.to_lines(), vec!["╭──╮", "│  │", "╰──╯"]);
}

#[test]
fn border_needs_two_by_two() {
    let mut grid = Grid::new(4, 1);
    grid.draw_border(grid.bounds(), BorderStyle::Light.charset());
    assert_eq!(grid.line(0), "    ");
}

#[test]
fn clear_resets_cells_and_cursor() {
    let mut grid = Grid::new(2, 1);
    grid.draw_text(0, 0, "xy");
    grid.set_cursor(Some(Cursor {
        x: 1,
        y: 0,
        shape: CursorShape::Bar,
    }));
    grid.clear();
    assert_eq!(grid.line(0), "  ");
    assert_eq!(grid.cursor(), None);
}

#[test]
fn cell_count_does_not_overflow_at_the_largest_size() {
    assert_eq!(cell_count(u16::MAX, u16::MAX), 4_294_836_225);
    assert_eq!(cell_count(0, u16::MAX), 0);
}

#[test]
fn resize_addresses_every_cell() {
    let mut grid = Grid::new(2, 2);
    grid.resize(300, 200);
    assert_eq!(grid.width(), 300);
    assert!(grid.cell(299, 199).is_some());
    assert!(grid.cell(300, 0).is_none());
}
