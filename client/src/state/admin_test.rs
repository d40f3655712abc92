use super::*;

// =============================================================
// Startup verification
// =============================================================

#[test]
fn stored_token_is_pending_until_verified() {
    let mut state = AdminState::with_stored_token(Some("t1".to_owned()));
    assert_eq!(state.pending_token(), Some("t1"));
    assert_eq!(state.bearer(), None);
    state.apply_verification(true);
    assert!(state.verified);
    assert_eq!(state.pending_token(), None);
    assert_eq!(state.bearer(), Some("t1"));
}

#[test]
fn rejected_token_is_cleared() {
    let mut state = AdminState::with_stored_token(Some("stale".to_owned()));
    state.apply_verification(false);
    assert!(!state.verified);
    assert_eq!(state.token, None);
}

#[test]
fn blank_stored_token_is_ignored() {
    let state = AdminState::with_stored_token(Some("  ".to_owned()));
    assert_eq!(state.token, None);
    assert_eq!(state.pending_token(), None);
}

#[test]
fn verification_without_token_stays_unverified() {
    let mut state = AdminState::default();
    state.apply_verification(true);
    assert!(!state.verified);
}

// =============================================================
// Shortcut and session
// =============================================================

#[test]
fn shortcut_prompts_when_not_verified() {
    let mut state = AdminState::default();
    assert_eq!(state.shortcut(), ShortcutAction::PromptLogin);
    assert!(!state.panel_open);
}

#[test]
fn shortcut_opens_panel_when_verified() {
    let mut state = AdminState::default();
    state.logged_in("t2".to_owned());
    state.close_panel();
    assert_eq!(state.shortcut(), ShortcutAction::OpenPanel);
    assert!(state.panel_open);
}

#[test]
fn login_opens_panel() {
    let mut state = AdminState { busy: true, ..AdminState::default() };
    state.logged_in("t3".to_owned());
    assert!(state.panel_open);
    assert!(!state.busy);
    assert_eq!(state.bearer(), Some("t3"));
}

#[test]
fn logout_returns_token_and_resets() {
    let mut state = AdminState::default();
    state.logged_in("t4".to_owned());
    assert_eq!(state.logout(), Some("t4".to_owned()));
    assert_eq!(state, AdminState::default());
    assert_eq!(state.logout(), None);
}

#[test]
fn shortcut_requires_ctrl_and_shift() {
    assert!(is_admin_shortcut(true, true, "A"));
    assert!(is_admin_shortcut(true, true, "a"));
    assert!(!is_admin_shortcut(true, false, "A"));
    assert!(!is_admin_shortcut(false, true, "A"));
    assert!(!is_admin_shortcut(true, true, "S"));
}
