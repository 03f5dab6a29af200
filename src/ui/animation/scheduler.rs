use std::hash::Hash;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::animator::Animator;
use super::frame::FrameRequester;

/// In-flight animators grouped by the component that started them.
pub struct AnimationScheduler<K> {
    animators: FxHashMap<K, Vec<Animator>>,
    frames: FrameRequester,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> AnimationScheduler<K> {
    pub fn new(frames: FrameRequester) -> Self {
        Self {
            animators: FxHashMap::default(),
            frames,
        }
    }

    pub fn frames(&self) -> &FrameRequester {
        &self.frames
    }

    /// Starts `animator` on behalf of `owner` and asks for a frame so the
    /// host starts ticking.
    pub fn add(&mut self, owner: K, animator: Animator) {
        tracing::trace!(?owner, ?animator, "animation started");
        self.animators.entry(owner).or_default().push(animator);
        self.frames.request();
    }

    /// Advances every animator by `dt`, dropping the finished ones. Requests
    /// another frame while any remain and returns whether any do.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.animators.retain(|owner, list| {
            list.retain_mut(|animator| {
                let running = animator.tick(dt);
                if !running {
                    tracing::trace!(?owner, to = animator.to(), "animation finished");
                }
                running
            });
            !list.is_empty()
        });
        let running = !self.animators.is_empty();
        if running {
            self.frames.request();
        }
        running
    }

    /// Drops `owner`'s animators without completing them.
    pub fn cancel_owner(&mut self, owner: K) -> usize {
        let dropped = self.animators.remove(&owner).map_or(0, |list| list.len());
        if dropped > 0 {
            tracing::debug!(?owner, dropped, "animations cancelled");
        }
        dropped
    }

    pub fn is_idle(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.animators.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/animation/scheduler.rs"]
mod tests;
