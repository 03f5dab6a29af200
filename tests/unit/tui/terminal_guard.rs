use super::*;
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<&'static str>>>;

struct Recorded {
    log: Log,
    refuse_enter: bool,
}

impl Recorded {
    fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            refuse_enter: false,
        }
    }
}

impl TerminalMode for Recorded {
    fn enter(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().push("enter");
        if self.refuse_enter {
            return Err(io::Error::other("not a tty"));
        }
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn dropping_the_guard_leaves_the_mode() {
    let log = Log::default();
    {
        let guard = TerminalGuard::with_mode(Recorded::new(&log)).unwrap();
        assert!(guard.is_active());
    }
    assert_eq!(*log.lock().unwrap(), ["enter", "leave"]);
}

#[test]
fn release_runs_once() {
    let log = Log::default();
    let mut guard = TerminalGuard::with_mode(Recorded::new(&log)).unwrap();

    guard.release().unwrap();
    guard.release().unwrap();
    assert!(!guard.is_active());
    drop(guard);

    assert_eq!(*log.lock().unwrap(), ["enter", "leave"]);
}

#[test]
fn a_mode_that_cannot_be_entered_is_never_left() {
    let log = Log::default();
    let mode = Recorded {
        log: log.clone(),
        refuse_enter: true,
    };

    assert!(TerminalGuard::with_mode(mode).is_err());
    assert_eq!(*log.lock().unwrap(), ["enter"]);
}
