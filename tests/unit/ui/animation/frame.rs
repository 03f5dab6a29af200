use super::*;

#[test]
fn requests_coalesce_until_taken() {
    let frames = FrameRequester::new();
    assert!(!frames.is_pending());

    frames.request();
    frames.clone().request();
    assert!(frames.is_pending());
    assert!(frames.take());
    assert!(!frames.take());
}

#[test]
fn clones_share_the_flag_across_threads() {
    let frames = FrameRequester::new();
    let remote = frames.clone();
    std::thread::spawn(move || remote.request())
        .join()
        .unwrap();
    assert!(frames.take());
}
