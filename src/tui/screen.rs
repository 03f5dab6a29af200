//! Full-screen host loop: reads terminal input, routes it through a
//! component tree and redraws when a frame was requested.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;

use crate::config::RuntimeConfig;
use crate::core::event::Event;
use crate::tui::crossterm::into_event;
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::component::ComponentTree;
use crate::ui::core::grid::{Cursor, CursorShape, Grid};

/// How long the loop blocks on input while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct Screen {
    terminal: RatatuiTerminal,
    grid: Grid,
    config: RuntimeConfig,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    cursor_shape: Option<CursorShape>,
}

impl Screen {
    /// Expects the terminal to be set up already (see `TerminalGuard`).
    pub fn new(config: RuntimeConfig) -> io::Result<Self> {
        let terminal = RatatuiTerminal::new(io::stdout())?;
        let (width, height) = terminal.size().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "terminal size unavailable, using fallback");
            (config.fallback_size.width, config.fallback_size.height)
        });
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            terminal,
            grid: Grid::new(width, height),
            config,
            tx,
            rx,
            cursor_shape: None,
        })
    }

    /// Events sent here are dispatched like terminal input; `Event::Custom`
    /// just wakes the loop.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    pub fn size(&self) -> (i32, i32) {
        (self.grid.width(), self.grid.height())
    }

    /// Runs until `quit` accepts an event. `quit` sees every event before the
    /// tree does.
    pub fn run(
        &mut self,
        tree: &mut ComponentTree,
        mut quit: impl FnMut(&Event) -> bool,
    ) -> io::Result<()> {
        tree.frames().request();
        let mut last_tick = Instant::now();

        loop {
            if tree.frames().take() {
                self.draw(tree)?;
            }

            let animating = !tree.animations().is_idle();
            if crossterm::event::poll(poll_timeout(animating, &self.config))? {
                loop {
                    if let Some(event) = into_event(crossterm::event::read()?) {
                        if self.handle(tree, event, &mut quit) {
                            return Ok(());
                        }
                    }
                    if !crossterm::event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
            while let Ok(event) = self.rx.try_recv() {
                if self.handle(tree, event, &mut quit) {
                    return Ok(());
                }
            }

            let now = Instant::now();
            // Animations started by this batch of input begin from zero.
            let dt = if animating {
                now.duration_since(last_tick)
            } else {
                Duration::ZERO
            };
            last_tick = now;
            if !tree.animations().is_idle() {
                tree.tick(dt);
                // The finishing step requests nothing but still moved a value.
                tree.frames().request();
            }
        }
    }

    /// Returns true when the loop should stop.
    fn handle(
        &mut self,
        tree: &mut ComponentTree,
        event: Event,
        quit: &mut impl FnMut(&Event) -> bool,
    ) -> bool {
        if quit(&event) {
            tracing::debug!(?event, "quit requested");
            return true;
        }
        if let Event::Resize { width, height } = event {
            self.grid.resize(width, height);
            tree.frames().request();
        }
        tree.dispatch(&event);
        false
    }

    fn draw(&mut self, tree: &mut ComponentTree) -> io::Result<()> {
        tree.render_to(&mut self.grid);
        let grid = &self.grid;
        let cursor = visible_cursor(grid.cursor());
        self.terminal.draw(|backend| {
            backend.draw(grid);
            backend.set_cursor(cursor);
        })?;

        let shape = cursor.map(|c| c.shape);
        if shape != self.cursor_shape {
            if let Some(style) = shape.and_then(cursor_style) {
                crossterm::execute!(io::stdout(), style)?;
            }
            self.cursor_shape = shape;
        }
        Ok(())
    }
}

fn poll_timeout(animating: bool, config: &RuntimeConfig) -> Duration {
    if animating {
        config.frame_interval()
    } else {
        IDLE_POLL
    }
}

fn visible_cursor(cursor: Option<Cursor>) -> Option<Cursor> {
    cursor.filter(|c| c.shape != CursorShape::Hidden)
}

fn cursor_style(shape: CursorShape) -> Option<SetCursorStyle> {
    match shape {
        CursorShape::Hidden => None,
        CursorShape::Block => Some(SetCursorStyle::SteadyBlock),
        CursorShape::BlockBlinking => Some(SetCursorStyle::BlinkingBlock),
        CursorShape::Bar => Some(SetCursorStyle::SteadyBar),
        CursorShape::BarBlinking => Some(SetCursorStyle::BlinkingBar),
        CursorShape::Underline => Some(SetCursorStyle::SteadyUnderScore),
        CursorShape::UnderlineBlinking => Some(SetCursorStyle::BlinkingUnderScore),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen.rs"]
mod tests;
