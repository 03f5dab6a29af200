use std::fmt;
use std::time::Duration;

use super::easing::{self, EasingFn};
use crate::core::binding::Ref;

/// One animation step, handed to `Component::on_animation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    pub duration: Duration,
}

impl Params {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

/// Interpolates a bound `f32` from its value at creation time towards `to`.
pub struct Animator {
    value: Ref<f32>,
    from: f32,
    to: f32,
    duration: Duration,
    easing: Box<dyn Fn(f32) -> f32>,
    delay: Duration,
    elapsed: Duration,
}

impl Animator {
    pub fn new(value: &Ref<f32>, to: f32, duration: Duration) -> Self {
        let from = value.get();
        Self {
            value: value.clone(),
            from,
            to,
            duration,
            easing: Box::new(easing::linear as EasingFn),
            delay: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_easing(mut self, easing: impl Fn(f32) -> f32 + 'static) -> Self {
        self.easing = Box::new(easing);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn value(&self) -> &Ref<f32> {
        &self.value
    }

    /// Normalized progress after the delay, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let Some(active) = self.elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Advances by `dt` and writes the interpolated value. Returns whether
    /// the animator still needs frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.delay {
            return true;
        }
        if self.is_done() {
            self.value.set(self.to);
            return false;
        }
        let eased = (self.easing)(self.progress());
        self.value.set(self.from + (self.to - self.from) * eased);
        true
    }
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/animation/animator.rs"]
mod tests;
