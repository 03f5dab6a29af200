use std::io;

use cellui::config::RuntimeConfig;
use cellui::core::{Event, Key, Ref};
use cellui::tui::{Screen, TerminalGuard};
use cellui::ui::animation::{easing, Animator};
use cellui::ui::component::{slider, CatchEvent, ComponentTree, Container, Renderer};
use cellui::ui::dom::{color, gauge, hbox, separator, text, vbox, window, xflex, Element};
use cellui::ui::core::Color;

mod logging;

fn is_quit(event: &Event) -> bool {
    event.is_char('q') || event.is_key(Key::Escape) || event.is_key(Key::Ctrl('c'))
}

fn build(config: &RuntimeConfig) -> ComponentTree {
    let mut tree = ComponentTree::new(Renderer::new(|cx| {
        window(
            text(" cellui "),
            vbox(vec![
                cx.render_active_child(),
                separator(),
                text("tab/arrows: move  a: pulse  q: quit").pipe(color(Color::GRAY_DARK)),
            ]),
        )
    }));

    let pulse = Ref::new(0.0f32);
    let duration = config.animation.duration() * 4;
    let delay = config.animation.delay();
    let target = pulse.clone();
    let root = tree.root();
    let keys = tree
        .add_child(
            root,
            CatchEvent::new(move |event, cx| {
                if !event.is_char('a') {
                    return false;
                }
                let to = if target.get() < 0.5 { 1.0 } else { 0.0 };
                cx.animate(
                    Animator::new(&target, to, duration)
                        .with_easing(easing::cubic_in_out)
                        .with_delay(delay),
                );
                true
            }),
        )
        .ok();

    let Some(keys) = keys else {
        return tree;
    };
    let Ok(list) = tree.add_child(keys, Container::vertical()) else {
        return tree;
    };

    let red = Ref::new(128i32);
    let volume = Ref::new(0.5f32);
    let rows = [
        tree.add_child(
            list,
            slider("Red:    ", red, 0, 255, config.slider.default_increment),
        ),
        tree.add_child(list, slider("Volume: ", volume, 0.0f32, 1.0f32, 0.05f32)),
        tree.add_child(
            list,
            Renderer::new(move |_cx| -> Element {
                hbox(vec![text("Pulse:  "), gauge(pulse.get()).pipe(xflex)])
            }),
        ),
    ];
    if let Some(err) = rows.into_iter().find_map(Result::err) {
        tracing::warn!(error = %err, "demo tree incomplete");
    }
    tree
}

fn main() -> io::Result<()> {
    let config = RuntimeConfig::from_env();
    let _logging = logging::init(&config);

    let guard = TerminalGuard::new()?;
    let mut screen = Screen::new(config.clone())?;
    let mut tree = build(&config);
    tracing::info!(components = tree.len(), "demo started");

    let result = screen.run(&mut tree, is_quit);
    drop(screen);
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "demo stopped");
    }
    result
}
