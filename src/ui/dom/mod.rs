//! Render tree: immutable per-frame elements that measure themselves, accept a
//! box and paint into a [`Grid`](crate::ui::core::grid::Grid).

pub mod border;
pub mod box_helper;
pub mod container;
pub mod decorator;
pub mod flexbox;
pub mod frame;
pub mod gauge;
pub mod node;
pub mod text;

pub use border::{
    border, border_dashed, border_double, border_empty, border_heavy, border_light,
    border_rounded, border_styled, separator, separator_char, separator_dashed,
    separator_double, separator_empty, separator_heavy, separator_light, window,
};
pub use container::{dbox, hbox, vbox};
pub use decorator::{
    align_right, bgcolor, blink, bold, center, clear_under, color, dim, filler, flex, flex_grow,
    flex_shrink, focus, focus_cursor_bar, focus_cursor_bar_blinking, focus_cursor_block,
    focus_cursor_block_blinking, focus_cursor_underline, focus_cursor_underline_blinking,
    focus_position, hcenter, inverted, italic, notflex, nothing, reflect, select, size,
    strikethrough, underlined, underlined_double, vcenter, xflex, xflex_grow, xflex_shrink,
    yflex, yflex_grow, yflex_shrink, Constraint, WidthOrHeight,
};
pub use flexbox::{
    flexbox, hflow, vflow, AlignItems, FlexDirection, FlexWrap, FlexboxConfig, JustifyContent,
};
pub use frame::{frame, xframe, yframe};
pub use gauge::{
    gauge, gauge_direction, gauge_down, gauge_left, gauge_right, gauge_up, spinner, Direction,
};
pub use node::{
    empty_element, Axis, Element, Elements, Node, Requirement, Selection, Status,
    MAX_LAYOUT_ITERATIONS,
};
pub use text::{
    paragraph, paragraph_align_center, paragraph_align_justify, paragraph_align_left,
    paragraph_align_right, text, vtext,
};
