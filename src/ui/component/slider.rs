//! Sliders over bound numeric values.

use std::fmt;

use super::capture::CapturedMouse;
use super::component::{Component, Focusability};
use super::tree::Cx;
use crate::core::binding::{ConstRef, ConstStringRef, Ref};
use crate::core::event::{Event, Key, Motion, MouseButton};
use crate::ui::core::geom::{Bounds, BoundsCell};
use crate::ui::core::style::Color;
use crate::ui::dom::{
    color, dim, focus, gauge_direction, hbox, nothing, reflect, select, text, underlined,
    vcenter, xflex, yflex, Direction, Element,
};

/// Numeric types a slider can drive. Integer arithmetic saturates.
pub trait SliderValue: Copy + PartialOrd + fmt::Debug + 'static {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn to_f64(self) -> f64;
    /// Truncates towards zero and saturates for integers.
    fn from_f64(value: f64) -> Self;
}

macro_rules! slider_int {
    ($($t:ty),*) => {$(
        impl SliderValue for $t {
            fn add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            fn sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! slider_float {
    ($($t:ty),*) => {$(
        impl SliderValue for $t {
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

slider_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
slider_float!(f32, f64);

/// `max(min, min(max, value))`: with `min > max` the result is `min`.
fn clamp<T: SliderValue>(value: T, min: T, max: T) -> T {
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}

pub struct SliderOption<T> {
    pub value: Ref<T>,
    pub min: ConstRef<T>,
    pub max: ConstRef<T>,
    pub increment: ConstRef<T>,
    /// Direction the gauge fills in as the value grows.
    pub direction: Direction,
    pub color_active: Color,
    pub color_inactive: Color,
}

impl<T: SliderValue> SliderOption<T> {
    /// Range 0..=100 stepping by 5, filling rightwards.
    pub fn new(value: Ref<T>) -> Self {
        Self {
            value,
            min: ConstRef::Value(T::from_f64(0.0)),
            max: ConstRef::Value(T::from_f64(100.0)),
            increment: ConstRef::Value(T::from_f64(5.0)),
            direction: Direction::Right,
            color_active: Color::WHITE,
            color_inactive: Color::GRAY_DARK,
        }
    }

    pub fn with_range(mut self, min: impl Into<ConstRef<T>>, max: impl Into<ConstRef<T>>) -> Self {
        self.min = min.into();
        self.max = max.into();
        self
    }

    pub fn with_increment(mut self, increment: impl Into<ConstRef<T>>) -> Self {
        self.increment = increment.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_colors(mut self, active: Color, inactive: Color) -> Self {
        self.color_active = active;
        self.color_inactive = inactive;
        self
    }
}

/// A gauge whose fill tracks a bound value. Arrow keys (and `hjkl`) step
/// the value by the increment; dragging with the primary button sets it
/// from the pointer position.
pub struct Slider<T> {
    value: Ref<T>,
    min: ConstRef<T>,
    max: ConstRef<T>,
    increment: ConstRef<T>,
    direction: Direction,
    color_active: Color,
    color_inactive: Color,
    gauge_box: BoundsCell,
    captured: Option<CapturedMouse>,
}

impl<T: SliderValue> Slider<T> {
    pub fn new(option: SliderOption<T>) -> Self {
        Self {
            value: option.value,
            min: option.min,
            max: option.max,
            increment: option.increment,
            direction: option.direction,
            color_active: option.color_active,
            color_inactive: option.color_inactive,
            gauge_box: BoundsCell::new(),
            captured: None,
        }
    }

    pub fn value(&self) -> &Ref<T> {
        &self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.captured.as_ref().is_some_and(CapturedMouse::is_live)
    }

    fn increase(&self) {
        let step = self.increment.get();
        self.value.update(|v| *v = v.add(step));
    }

    fn decrease(&self) {
        let step = self.increment.get();
        self.value.update(|v| *v = v.sub(step));
    }

    fn on_left(&self) {
        match self.direction {
            Direction::Right => self.decrease(),
            Direction::Left => self.increase(),
            Direction::Up | Direction::Down => {}
        }
    }

    fn on_right(&self) {
        match self.direction {
            Direction::Right => self.increase(),
            Direction::Left => self.decrease(),
            Direction::Up | Direction::Down => {}
        }
    }

    fn on_up(&self) {
        match self.direction {
            Direction::Up => self.decrease(),
            Direction::Down => self.increase(),
            Direction::Left | Direction::Right => {}
        }
    }

    fn on_down(&self) {
        match self.direction {
            Direction::Down => self.decrease(),
            Direction::Up => self.increase(),
            Direction::Left | Direction::Right => {}
        }
    }

    fn percent(&self) -> f32 {
        let (min, max) = (self.min.get().to_f64(), self.max.get().to_f64());
        let span = max - min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value.get().to_f64() - min) / span) as f32
    }

    /// Value under the pointer while dragging.
    fn value_at(&self, x: i32, y: i32) -> T {
        let (min, max) = (self.min.get(), self.max.get());
        let gauge = self.gauge_box.get();
        let (offset, span) = if self.direction.is_horizontal() {
            (x - gauge.x_min, gauge.x_max - gauge.x_min)
        } else {
            (y - gauge.y_min, gauge.y_max - gauge.y_min)
        };
        let step = if span == 0 {
            T::from_f64(0.0)
        } else {
            T::from_f64(offset as f64 * (max.to_f64() - min.to_f64()) / span as f64)
        };
        match self.direction {
            Direction::Right | Direction::Down => min.add(step),
            Direction::Left | Direction::Up => max.sub(step),
        }
    }

    fn on_mouse(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        let Some(mouse) = event.as_mouse() else {
            return false;
        };

        if self.is_dragging() {
            if mouse.motion == Motion::Released {
                self.captured = None;
                return true;
            }
            let value = self.value_at(mouse.x, mouse.y);
            self.value
                .set(clamp(value, self.min.get(), self.max.get()));
            return true;
        }

        if mouse.button != MouseButton::Left || mouse.motion != Motion::Pressed {
            return false;
        }
        if !self.gauge_box.contains(mouse.x, mouse.y) {
            return false;
        }
        self.captured = cx.capture_mouse();
        if self.captured.is_none() {
            return false;
        }
        cx.take_focus();
        true
    }
}

impl<T: SliderValue> Component for Slider<T> {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        let tint = if cx.focused() {
            self.color_active
        } else {
            self.color_inactive
        };
        let flex = if self.direction.is_horizontal() {
            xflex
        } else {
            yflex
        };
        gauge_direction(self.percent(), self.direction)
            .pipe(flex)
            .pipe(reflect(&self.gauge_box))
            .pipe(color(tint))
    }

    fn on_event(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        if event.is_mouse() {
            return self.on_mouse(event, cx);
        }

        let before = self.value.get();
        if event.is_key(Key::ArrowLeft) || event.is_char('h') {
            self.on_left();
        }
        if event.is_key(Key::ArrowRight) || event.is_char('l') {
            self.on_right();
        }
        // Vertical keys go through the opposite handler.
        if event.is_key(Key::ArrowUp) || event.is_char('k') {
            self.on_down();
        }
        if event.is_key(Key::ArrowDown) || event.is_char('j') {
            self.on_up();
        }
        let (min, max) = (self.min.get(), self.max.get());
        self.value.update(|v| *v = clamp(*v, min, max));
        before != self.value.get()
    }

    fn focusability(&self) -> Focusability {
        Focusability::Focusable
    }

    fn hit_box(&self) -> Option<Bounds> {
        Some(self.gauge_box.get())
    }
}

/// A horizontal slider with a dimmed label on its left.
pub struct SliderWithLabel<T> {
    label: ConstStringRef,
    inner: Slider<T>,
    bounds: BoundsCell,
}

impl<T: SliderValue> SliderWithLabel<T> {
    pub fn new(label: impl Into<ConstStringRef>, inner: Slider<T>) -> Self {
        Self {
            label: label.into(),
            inner,
            bounds: BoundsCell::new(),
        }
    }

    pub fn slider(&self) -> &Slider<T> {
        &self.inner
    }
}

impl<T: SliderValue> Component for SliderWithLabel<T> {
    fn render(&mut self, cx: &mut Cx<'_>) -> Element {
        let hovered = cx
            .pointer()
            .is_some_and(|p| self.bounds.get().contains_pos(p));
        let focused = cx.focused();
        let tint = if focused || hovered {
            Color::WHITE
        } else {
            Color::GRAY_DARK
        };
        let manage_focus = if focused {
            focus
        } else if cx.active() {
            select
        } else {
            nothing
        };
        hbox(vec![
            text(self.label.get()).pipe(dim).pipe(vcenter),
            hbox(vec![
                text("["),
                self.inner.render(cx).pipe(underlined),
                text("]"),
            ])
            .pipe(xflex),
        ])
        .pipe(color(tint))
        .pipe(xflex)
        .pipe(reflect(&self.bounds))
        .pipe(manage_focus)
    }

    fn on_event(&mut self, event: &Event, cx: &mut Cx<'_>) -> bool {
        if self.inner.on_event(event, cx) {
            return true;
        }
        match event.as_mouse() {
            Some(mouse) if self.bounds.contains(mouse.x, mouse.y) => cx.can_capture_mouse(),
            _ => false,
        }
    }

    fn focusability(&self) -> Focusability {
        Focusability::Focusable
    }

    fn hit_box(&self) -> Option<Bounds> {
        Some(self.bounds.get())
    }
}

/// Labelled horizontal slider over `value`.
pub fn slider<T: SliderValue>(
    label: impl Into<ConstStringRef>,
    value: Ref<T>,
    min: impl Into<ConstRef<T>>,
    max: impl Into<ConstRef<T>>,
    increment: impl Into<ConstRef<T>>,
) -> SliderWithLabel<T> {
    let option = SliderOption::new(value)
        .with_range(min, max)
        .with_increment(increment);
    SliderWithLabel::new(label, Slider::new(option))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/component/slider.rs"]
mod tests;
