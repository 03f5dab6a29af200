use super::*;
use slotmap::SlotMap;

fn two_ids() -> (ComponentId, ComponentId) {
    let mut map: SlotMap<ComponentId, ()> = SlotMap::with_key();
    (map.insert(()), map.insert(()))
}

#[test]
fn only_one_capture_at_a_time() {
    let (a, b) = two_ids();
    let arbiter = CaptureArbiter::new();

    let token = arbiter.try_capture(a);
    assert!(token.is_some());
    assert_eq!(arbiter.owner(), Some(a));
    assert!(arbiter.try_capture(b).is_none());
    assert_eq!(arbiter.owner(), Some(a));

    drop(token);
    assert!(!arbiter.is_captured());
    assert!(arbiter.try_capture(b).is_some());
}

#[test]
fn release_is_idempotent() {
    let (a, b) = two_ids();
    let arbiter = CaptureArbiter::new();

    let mut token = arbiter.try_capture(a).unwrap();
    token.release();
    assert!(!token.is_live());
    assert!(!arbiter.is_captured());

    let other = arbiter.try_capture(b).unwrap();
    token.release();
    assert!(other.is_live());
    assert_eq!(arbiter.owner(), Some(b));
}

#[test]
fn force_release_leaves_stale_handles_inert() {
    let (a, b) = two_ids();
    let arbiter = CaptureArbiter::new();

    let stale = arbiter.try_capture(a).unwrap();
    arbiter.force_release();
    assert!(!stale.is_live());

    let fresh = arbiter.try_capture(b).unwrap();
    drop(stale);
    assert!(fresh.is_live());
    assert_eq!(arbiter.owner(), Some(b));
}

#[test]
fn clones_share_the_token() {
    let (a, _) = two_ids();
    let arbiter = CaptureArbiter::new();
    let shared = arbiter.clone();

    let _token = arbiter.try_capture(a).unwrap();
    assert!(shared.is_captured());
    assert!(shared.try_capture(a).is_none());
}
