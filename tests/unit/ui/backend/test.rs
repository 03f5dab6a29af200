use super::*;
use crate::ui::core::grid::CursorShape;

#[test]
fn keeps_every_presented_frame() {
    let mut backend = TestBackend::new();
    assert!(backend.last().is_none());
    assert!(backend.lines().is_empty());

    let mut grid = Grid::new(3, 1);
    grid.draw_text(0, 0, "ab");
    backend.draw(&grid);
    grid.draw_text(0, 0, "xyz");
    backend.draw(&grid);

    assert_eq!(backend.frame_count(), 2);
    assert_eq!(backend.lines(), vec!["xyz"]);
}

#[test]
fn remembers_the_cursor() {
    let mut backend = TestBackend::new();
    let cursor = Cursor {
        x: 1,
        y: 0,
        shape: CursorShape::Bar,
    };
    backend.set_cursor(Some(cursor));
    assert_eq!(backend.cursor(), Some(cursor));
    backend.set_cursor(None);
    assert_eq!(backend.cursor(), None);
}
