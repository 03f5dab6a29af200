use super::*;

fn render(mut root: Element, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    root.render(&mut grid);
    grid
}

#[test]
fn progress_is_clamped() {
    assert_eq!(clamp_progress(-1.0), 0.0);
    assert_eq!(clamp_progress(1.5), 1.0);
    assert_eq!(clamp_progress(f32::NAN), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
}

#[test]
fn horizontal_gauge_uses_eighth_blocks() {
    assert_eq!(render(gauge(0.5), 4, 1).line(0), "██  ");
    assert_eq!(render(gauge(0.3), 5, 1).line(0), "█▌   ");
    assert_eq!(render(gauge(1.0), 3, 1).line(0), "███");
}

#[test]
fn out_of_range_progress_paints_like_the_bounds() {
    assert_eq!(render(gauge(7.0), 3, 1).line(0), "███");
    assert_eq!(render(gauge(-2.0), 3, 1).line(0), "   ");
    assert_eq!(render(gauge(f32::NAN), 3, 1).line(0), "   ");
}

#[test]
fn vertical_gauge_fills_from_the_bottom() {
    let grid = render(gauge_up(0.5), 1, 4);
    assert_eq!(grid.to_lines(), vec![" ", " ", "█", "█"]);
}

#[test]
fn left_gauge_is_the_inverted_complement() {
    let grid = render(gauge_left(0.25), 4, 1);
    assert_eq!(grid.line(0), "███ ");
    for x in 0..4 {
        let style = grid.cell(x, 0).map(|c| c.style).unwrap_or_default();
        assert!(style.mods.contains(Mod::REVERSE));
    }
}

#[test]
fn down_gauge_is_inverted_too() {
    let grid = render(gauge_down(0.5), 1, 2);
    assert_eq!(grid.to_lines(), vec![" ", "█"]);
    let style = grid.cell(0, 1).map(|c| c.style).unwrap_or_default();
    assert!(style.mods.contains(Mod::REVERSE));
}

#[test]
fn gauge_flexes_along_its_direction() {
    let req = gauge(0.1).compute_requirement();
    assert_eq!((req.flex_grow_x, req.flex_grow_y), (1, 0));
    let req = gauge_up(0.1).compute_requirement();
    assert_eq!((req.flex_grow_x, req.flex_grow_y), (0, 1));
}

#[test]
fn spinner_indices_wrap() {
    assert_eq!(render(spinner(0, 5), 1, 1).line(0), "\\");
    assert_eq!(render(spinner(SPINNERS.len(), 0), 1, 1).line(0), "-");
}
