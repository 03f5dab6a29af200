use super::*;

fn blit(grid: &Grid, width: u16, height: u16) -> Buffer {
    let area = RRect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    GridWidget { grid }.render(area, &mut buf);
    buf
}

#[test]
fn copies_symbols_and_styles() {
    let mut grid = Grid::new(3, 1);
    grid.draw_text(0, 0, "abc");
    grid.style_rect(grid.bounds(), |s| {
        s.fg = Some(Color::RED);
        s.mods |= Mod::BOLD | Mod::STRIKETHROUGH;
    });

    let buf = blit(&grid, 3, 1);
    assert_eq!(buf[(1, 0)].symbol(), "b");
    assert_eq!(buf[(1, 0)].fg, RColor::Indexed(1));
    assert!(buf[(1, 0)].modifier.contains(RModifier::BOLD));
    assert!(buf[(1, 0)].modifier.contains(RModifier::CROSSED_OUT));
}

#[test]
fn wide_glyph_placeholder_is_left_blank() {
    let mut grid = Grid::new(3, 1);
    grid.draw_text(0, 0, "中a");

    let buf = blit(&grid, 3, 1);
    assert_eq!(buf[(0, 0)].symbol(), "中");
    assert_eq!(buf[(1, 0)].symbol(), " ");
    assert_eq!(buf[(2, 0)].symbol(), "a");
}

#[test]
fn clips_to_the_smaller_of_grid_and_area() {
    let mut grid = Grid::new(4, 2);
    grid.draw_text(0, 0, "wxyz");

    let buf = blit(&grid, 2, 1);
    assert_eq!(buf[(0, 0)].symbol(), "w");
    assert_eq!(buf[(1, 0)].symbol(), "x");
}

#[test]
fn double_underline_degrades_to_underline() {
    let style = to_ratatui_style(Style {
        mods: Mod::DOUBLE_UNDERLINE,
        ..Style::default()
    });
    assert!(style.add_modifier.contains(RModifier::UNDERLINED));
}
