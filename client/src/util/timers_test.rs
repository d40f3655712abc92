#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn after_does_not_run_without_browser() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = ran.clone();
    after(0, move || flag.set(true));
    assert!(!ran.get());
}

#[test]
fn loop_handle_starts_running_and_stops() {
    let handle = every(16, || true);
    assert!(handle.is_running());
    let shared = handle.clone();
    shared.stop();
    assert!(!handle.is_running());
}
