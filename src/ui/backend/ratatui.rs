use crate::ui::backend::Backend;
use crate::ui::core::grid::{Cursor, Grid};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Cursor>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame, cursor: None }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        if let Some(cursor) = self.cursor {
            let (Ok(x), Ok(y)) = (u16::try_from(cursor.x), u16::try_from(cursor.y)) else {
                return;
            };
            // If this method is not called, ratatui hides the cursor for this frame.
            self.frame.set_cursor_position((x, y));
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, grid: &Grid) {
        let area = self.frame.area();
        self.frame.render_widget(GridWidget { grid }, area);
    }

    fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Terminal size in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend),
    {
        self.terminal.draw(|frame| {
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend);
        })?;
        Ok(())
    }
}

/// Copies a grid into the frame buffer, cell for cell.
pub struct GridWidget<'a> {
    pub grid: &'a Grid,
}

impl Widget for GridWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let width = (area.width as i32).min(self.grid.width());
        let height = (area.height as i32).min(self.grid.height());
        for y in 0..height {
            for x in 0..width {
                let Some(src) = self.grid.cell(x, y) else {
                    continue;
                };
                let pos = (area.x + x as u16, area.y + y as u16);
                let Some(dst) = buf.cell_mut(pos) else {
                    continue;
                };
                if src.is_placeholder() {
                    // Covered by the wide glyph on its left.
                    dst.reset();
                } else {
                    dst.set_symbol(&src.symbol);
                }
                dst.set_style(to_ratatui_style(src.style));
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out = out.add_modifier(to_ratatui_mods(s.mods));
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    // ratatui has no double underline.
    if m.contains(Mod::UNDERLINE) || m.contains(Mod::DOUBLE_UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    if m.contains(Mod::BLINK) {
        out |= RModifier::SLOW_BLINK;
    }
    if m.contains(Mod::STRIKETHROUGH) {
        out |= RModifier::CROSSED_OUT;
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
