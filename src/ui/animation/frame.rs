//! Redraw requests. Any number of requests between two redraws collapse
//! into one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle; every clone raises the same flag, from any thread.
#[derive(Clone, Debug, Default)]
pub struct FrameRequester {
    pending: Arc<AtomicBool>,
}

impl FrameRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Clears the flag and reports whether it was set.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/animation/frame.rs"]
mod tests;
