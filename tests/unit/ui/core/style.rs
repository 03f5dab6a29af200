use super::*;

#[test]
fn mod_bit_ops_and_contains() {
    let m = Mod::BOLD | Mod::UNDERLINE | Mod::STRIKETHROUGH;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::UNDERLINE | Mod::STRIKETHROUGH));
    assert!(!m.contains(Mod::REVERSE));
    assert!(Mod::NONE.is_empty());
}

#[test]
fn toggle_flips_a_modifier() {
    let mut m = Mod::REVERSE;
    m.toggle(Mod::REVERSE);
    assert!(m.is_empty());
    m.toggle(Mod::REVERSE);
    assert!(m.contains(Mod::REVERSE));
}

#[test]
fn patch_overrides_colors_and_merges_mods() {
    let base = Style::default().fg(Color::WHITE).add_mod(Mod::BOLD);
    let top = Style::default().bg(Color::Rgb(1, 2, 3)).add_mod(Mod::DIM);
    let s = base.patch(top);
    assert_eq!(s.fg, Some(Color::WHITE));
    assert_eq!(s.bg, Some(Color::Rgb(1, 2, 3)));
    assert!(s.mods.contains(Mod::BOLD | Mod::DIM));
}
