//! Admin session state for the hidden "add work" panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is restored from `localStorage` at startup and only trusted once
//! `/api/admin/verify` accepts it. The panel is opened with a keyboard
//! shortcut; an unverified visitor is asked for the password instead.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// What the admin shortcut should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Verified: the panel was opened.
    OpenPanel,
    /// Not verified: ask for the password.
    PromptLogin,
}

/// Admin authentication and panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminState {
    /// Bearer token, stored or freshly issued.
    pub token: Option<String>,
    /// The backend accepted `token`.
    pub verified: bool,
    pub panel_open: bool,
    /// A login or add-work request is in flight.
    pub busy: bool,
}

impl AdminState {
    /// State restored from a stored token, pending verification.
    pub fn with_stored_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()), ..Self::default() }
    }

    /// Token to send for verification at startup.
    pub fn pending_token(&self) -> Option<&str> {
        if self.verified { None } else { self.token.as_deref() }
    }

    /// Record the verify outcome. A rejected token is dropped.
    pub fn apply_verification(&mut self, valid: bool) {
        self.verified = valid && self.token.is_some();
        if !valid {
            self.token = None;
        }
    }

    /// Handle the admin shortcut.
    pub fn shortcut(&mut self) -> ShortcutAction {
        if self.verified {
            self.panel_open = true;
            ShortcutAction::OpenPanel
        } else {
            ShortcutAction::PromptLogin
        }
    }

    /// A login succeeded: keep the token and show the panel.
    pub fn logged_in(&mut self, token: String) {
        self.token = Some(token);
        self.verified = true;
        self.panel_open = true;
        self.busy = false;
    }

    /// Forget the session. Returns the token to revoke on the backend.
    pub fn logout(&mut self) -> Option<String> {
        self.verified = false;
        self.panel_open = false;
        self.busy = false;
        self.token.take()
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Token for authorized requests; only once verified.
    pub fn bearer(&self) -> Option<&str> {
        if self.verified { self.token.as_deref() } else { None }
    }
}

/// Whether a keydown is the admin shortcut (Ctrl+Shift+A).
pub fn is_admin_shortcut(ctrl: bool, shift: bool, key: &str) -> bool {
    ctrl && shift && key.eq_ignore_ascii_case("a")
}
