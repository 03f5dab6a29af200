use super::*;
use crate::core::binding::Ref;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn adding_an_animator_requests_a_frame() {
    let frames = FrameRequester::new();
    let mut scheduler = AnimationScheduler::new(frames.clone());
    let value = Ref::new(0.0);
    scheduler.add(1u32, Animator::new(&value, 1.0, ms(10)));
    assert!(frames.take());
    assert_eq!(scheduler.len(), 1);
}

#[test]
fn ticking_requests_frames_until_everything_finished() {
    let frames = FrameRequester::new();
    let mut scheduler = AnimationScheduler::new(frames.clone());
    let a = Ref::new(0.0);
    let b = Ref::new(0.0);
    scheduler.add(1u32, Animator::new(&a, 1.0, ms(10)));
    scheduler.add(2u32, Animator::new(&b, 1.0, ms(30)));
    frames.take();

    assert!(scheduler.tick(ms(20)));
    assert!(frames.take());
    assert_eq!(a.get(), 1.0);
    assert_eq!(scheduler.len(), 1);

    assert!(!scheduler.tick(ms(20)));
    assert!(!frames.take());
    assert_eq!(b.get(), 1.0);
    assert!(scheduler.is_idle());
}

#[test]
fn cancelling_an_owner_drops_only_its_animators() {
    let mut scheduler = AnimationScheduler::new(FrameRequester::new());
    let value = Ref::new(0.0);
    scheduler.add(1u32, Animator::new(&value, 1.0, ms(10)));
    scheduler.add(1u32, Animator::new(&value, 2.0, ms(10)));
    scheduler.add(2u32, Animator::new(&value, 3.0, ms(10)));

    assert_eq!(scheduler.cancel_owner(1), 2);
    assert_eq!(scheduler.cancel_owner(1), 0);
    assert_eq!(scheduler.len(), 1);
}
