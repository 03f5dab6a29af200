use super::*;
use crate::ui::dom::text::text;

fn item(main: i32, cross: i32) -> Item {
    Item {
        main,
        cross,
        grow: 0,
        shrink: 0,
    }
}

fn spans(layout: &Layout) -> Vec<(i32, i32, i32)> {
    layout
        .placements
        .iter()
        .map(|p| (p.main_pos, p.main_len, p.cross_pos))
        .collect()
}

fn render(mut root: Element, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    root.render(&mut grid);
    grid
}

#[test]
fn items_wrap_onto_new_lines() {
    let config = FlexboxConfig::default().with_gap(1, 0);
    let out = layout(&config, &[item(3, 1), item(3, 1), item(3, 1)], 7, None);
    assert_eq!(spans(&out), vec![(0, 3, 0), (4, 3, 0), (0, 3, 1)]);
    assert_eq!((out.extent_main, out.extent_cross), (7, 2));
}

#[test]
fn nowrap_shrinks_instead_of_wrapping() {
    let config = FlexboxConfig::default().with_wrap(FlexWrap::NoWrap);
    let mut items = [item(4, 1), item(4, 1)];
    for it in &mut items {
        it.shrink = 1;
    }
    let out = layout(&config, &items, 6, None);
    assert_eq!(spans(&out), vec![(0, 3, 0), (3, 3, 0)]);
}

#[test]
fn zero_sized_items_never_force_a_wrap() {
    let config = FlexboxConfig::default().with_gap(1, 0);
    let out = layout(&config, &[item(5, 1), item(0, 1)], 5, None);
    assert_eq!(out.extent_cross, 1);
}

#[test]
fn justify_content_distributes_free_space() {
    let items = [item(1, 1), item(1, 1)];
    let cases = [
        (JustifyContent::FlexStart, vec![0, 1]),
        (JustifyContent::FlexEnd, vec![5, 6]),
        (JustifyContent::Center, vec![2, 3]),
        (JustifyContent::SpaceBetween, vec![0, 6]),
        (JustifyContent::SpaceAround, vec![1, 4]),
        (JustifyContent::SpaceEvenly, vec![1, 4]),
    ];
    for (justify, expected) in cases {
        let config = FlexboxConfig::default().with_justify_content(justify);
        let out = layout(&config, &items, 7, None);
        let starts: Vec<i32> = out.placements.iter().map(|p| p.main_pos).collect();
        assert_eq!(starts, expected, "{justify:?}");
    }
}

#[test]
fn stretch_grows_every_item() {
    let config = FlexboxConfig::default().with_justify_content(JustifyContent::Stretch);
    let out = layout(&config, &[item(1, 1), item(1, 1)], 6, None);
    assert_eq!(spans(&out), vec![(0, 3, 0), (3, 3, 0)]);
}

#[test]
fn align_items_positions_on_the_cross_axis() {
    let items = [item(1, 1), item(1, 3)];
    let center = FlexboxConfig::default().with_align_items(AlignItems::Center);
    let out = layout(&center, &items, 5, None);
    assert_eq!(out.placements[0].cross_pos, 1);

    let end = FlexboxConfig::default().with_align_items(AlignItems::FlexEnd);
    let out = layout(&end, &items, 5, None);
    assert_eq!(out.placements[0].cross_pos, 2);

    let stretch = FlexboxConfig::default().with_align_items(AlignItems::Stretch);
    let out = layout(&stretch, &items, 5, None);
    assert_eq!(out.placements[0].cross_len, 3);
}

#[test]
fn inversions_mirror_positions() {
    let row = FlexboxConfig::default().with_direction(FlexDirection::RowInversed);
    let out = layout(&row, &[item(2, 1), item(3, 1)], 10, None);
    assert_eq!(spans(&out), vec![(8, 2, 0), (5, 3, 0)]);

    let wrap = FlexboxConfig::default().with_wrap(FlexWrap::WrapInversed);
    let out = layout(&wrap, &[item(3, 1), item(3, 1)], 4, Some(5));
    let cross: Vec<i32> = out.placements.iter().map(|p| p.cross_pos).collect();
    assert_eq!(cross, vec![4, 3]);
}

#[test]
fn hflow_wraps_rendered_text() {
    let grid = render(hflow(vec![text("aaa"), text("bbb"), text("ccc")]), 7, 2);
    assert_eq!(grid.to_lines(), vec!["aaabbb ", "ccc    "]);
}

#[test]
fn vflow_fills_columns_first() {
    let grid = render(vflow(vec![text("a"), text("b"), text("c")]), 3, 2);
    assert_eq!(grid.to_lines(), vec!["ac ", "b  "]);
}

#[test]
fn narrower_box_requests_another_layout_pass() {
    let mut e = hflow(vec![text("aaa"), text("bbb")]);
    let req = e.compute_requirement();
    assert_eq!((req.min_x, req.min_y), (6, 1));

    e.set_box(Bounds::from_size(0, 0, 4, 2));
    let mut status = Status::default();
    e.check(&mut status);
    assert!(status.need_iteration);

    let req = e.compute_requirement();
    assert_eq!((req.min_x, req.min_y), (3, 2));
    e.set_box(Bounds::from_size(0, 0, 4, 2));
    let mut status = Status::default();
    e.check(&mut status);
    assert!(!status.need_iteration);
}
