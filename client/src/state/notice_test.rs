use super::*;

#[test]
fn show_replaces_previous_notice() {
    let mut state = NoticeState::default();
    state.show(NoticeKind::Info, "first");
    state.show(NoticeKind::Error, "second");
    let current = state.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, NoticeKind::Error);
}

#[test]
fn stale_expiry_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.show(NoticeKind::Success, "saved");
    let new = state.show(NoticeKind::Success, "saved again");
    assert!(!state.expire(old));
    assert!(state.current().is_some());
    assert!(state.expire(new));
    assert!(state.current().is_none());
}

#[test]
fn dismiss_clears_notice() {
    let mut state = NoticeState::default();
    let id = state.show(NoticeKind::Info, "hi");
    state.dismiss();
    assert!(state.current().is_none());
    assert!(!state.expire(id));
}

#[test]
fn kind_classes() {
    assert_eq!(NoticeKind::Info.class(), "info");
    assert_eq!(NoticeKind::Success.class(), "success");
    assert_eq!(NoticeKind::Error.class(), "error");
}
