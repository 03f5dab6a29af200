//! Mouse capture: at most one component at a time receives every mouse event
//! regardless of where the pointer is.

use std::cell::Cell;
use std::rc::Rc;

use super::ComponentId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Token {
    owner: ComponentId,
    generation: u64,
}

#[derive(Debug, Default)]
struct Slot {
    token: Cell<Option<Token>>,
    next_generation: Cell<u64>,
}

/// Session-wide owner of the single capture token.
#[derive(Clone, Debug, Default)]
pub struct CaptureArbiter {
    slot: Rc<Slot>,
}

impl CaptureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the token to `owner`, or `None` while another one is live.
    pub fn try_capture(&self, owner: ComponentId) -> Option<CapturedMouse> {
        if let Some(live) = self.slot.token.get() {
            tracing::trace!(?owner, holder = ?live.owner, "mouse capture rejected");
            return None;
        }
        let generation = self.slot.next_generation.get();
        self.slot.next_generation.set(generation.wrapping_add(1));
        self.slot.token.set(Some(Token { owner, generation }));
        tracing::debug!(?owner, "mouse captured");
        Some(CapturedMouse {
            slot: Rc::clone(&self.slot),
            generation,
        })
    }

    pub fn owner(&self) -> Option<ComponentId> {
        self.slot.token.get().map(|t| t.owner)
    }

    pub fn is_captured(&self) -> bool {
        self.slot.token.get().is_some()
    }

    /// Drops the live token no matter who holds the handle. Outstanding
    /// handles become inert.
    pub fn force_release(&self) {
        if let Some(token) = self.slot.token.take() {
            tracing::debug!(owner = ?token.owner, "mouse capture force-released");
        }
    }
}

/// Proof of capture. Releasing it (explicitly or by dropping it) frees the
/// token; releasing more than once does nothing.
#[derive(Debug)]
pub struct CapturedMouse {
    slot: Rc<Slot>,
    generation: u64,
}

impl CapturedMouse {
    pub fn release(&mut self) {
        match self.slot.token.get() {
            Some(token) if token.generation == self.generation => {
                self.slot.token.set(None);
                tracing::debug!(owner = ?token.owner, "mouse capture released");
            }
            _ => {}
        }
    }

    /// Whether this handle still holds the live token.
    pub fn is_live(&self) -> bool {
        self.slot
            .token
            .get()
            .is_some_and(|t| t.generation == self.generation)
    }
}

impl Drop for CapturedMouse {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/component/capture.rs"]
mod tests;
