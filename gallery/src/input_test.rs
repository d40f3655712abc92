use super::*;

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_offsets() {
    assert_eq!(Direction::Prev.offset(), -1);
    assert_eq!(Direction::Next.offset(), 1);
}

#[test]
fn direction_from_data_dir() {
    assert_eq!(Direction::from_offset(-1), Some(Direction::Prev));
    assert_eq!(Direction::from_offset(1), Some(Direction::Next));
    assert_eq!(Direction::from_offset(0), None);
}

#[test]
fn direction_wrap_cycles_both_ways() {
    assert_eq!(Direction::Next.wrap(2, 3), 0);
    assert_eq!(Direction::Prev.wrap(0, 3), 2);
    assert_eq!(Direction::Next.wrap(0, 1), 0);
    assert_eq!(Direction::Prev.wrap(4, 0), 4);
}

#[test]
fn direction_wrap_recovers_out_of_range_index() {
    assert_eq!(Direction::Next.wrap(7, 3), 2);
}

// =============================================================
// KeyCommand
// =============================================================

#[test]
fn key_command_bindings() {
    assert_eq!(KeyCommand::from_key("ArrowLeft"), Some(KeyCommand::Navigate(Direction::Prev)));
    assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Navigate(Direction::Next)));
    assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::Close));
    assert_eq!(KeyCommand::from_key("Enter"), None);
}

// =============================================================
// SwipeTracker
// =============================================================

#[test]
fn swipe_left_beyond_threshold_is_next() {
    let mut swipe = SwipeTracker::new(40.0);
    swipe.begin(200.0);
    assert_eq!(swipe.end(120.0), Some(Direction::Next));
}

#[test]
fn swipe_right_beyond_threshold_is_prev() {
    let mut swipe = SwipeTracker::new(40.0);
    swipe.begin(100.0);
    assert_eq!(swipe.end(150.0), Some(Direction::Prev));
}

#[test]
fn swipe_at_threshold_is_ignored() {
    let mut swipe = SwipeTracker::new(60.0);
    swipe.begin(100.0);
    assert_eq!(swipe.end(160.0), None);
}

#[test]
fn swipe_without_start_is_ignored() {
    let mut swipe = SwipeTracker::new(40.0);
    assert_eq!(swipe.end(500.0), None);
}

#[test]
fn swipe_end_consumes_start() {
    let mut swipe = SwipeTracker::new(40.0);
    swipe.begin(0.0);
    assert!(swipe.is_tracking());
    assert_eq!(swipe.end(-100.0), Some(Direction::Next));
    assert!(!swipe.is_tracking());
    assert_eq!(swipe.end(-200.0), None);
}

#[test]
fn swipe_cancel_drops_pending_start() {
    let mut swipe = SwipeTracker::new(40.0);
    swipe.begin(0.0);
    swipe.cancel();
    assert_eq!(swipe.end(300.0), None);
}
