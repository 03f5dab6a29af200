//! Pull-based animation: the host ticks the scheduler once per frame with the
//! elapsed wall-clock time; animators write into bound values.

pub mod animator;
pub mod easing;
pub mod frame;
pub mod scheduler;

pub use animator::{Animator, Params};
pub use easing::EasingFn;
pub use frame::FrameRequester;
pub use scheduler::AnimationScheduler;
