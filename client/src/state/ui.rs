//! Local page chrome state (preloader, header, mobile menu, scroll progress).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of gallery and admin state so
//! scroll-driven rendering does not wake the works grid.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use gallery::motion;

/// UI state for the header, menu and scroll-driven chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub preloader_visible: bool,
    /// Header uses its compact style.
    pub scrolled: bool,
    pub menu_open: bool,
    /// Page scroll progress in percent.
    pub scroll_progress: f64,
    /// Current vertical scroll offset, for parallax.
    pub scroll_y: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { preloader_visible: true, scrolled: false, menu_open: false, scroll_progress: 0.0, scroll_y: 0.0 }
    }
}

impl UiState {
    /// Apply a window scroll measurement.
    pub fn on_scroll(&mut self, scroll_y: f64, document_height: f64, viewport_height: f64) {
        self.scroll_y = scroll_y;
        self.scrolled = motion::header_scrolled(scroll_y);
        self.scroll_progress = motion::scroll_progress(scroll_y, document_height, viewport_height);
    }

    /// Toggle the mobile menu. Returns whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn hide_preloader(&mut self) {
        self.preloader_visible = false;
    }
}

/// Whether page scrolling should be locked: mobile menu open or an overlay mounted.
pub fn body_scroll_locked(menu_open: bool, overlay_mounted: bool) -> bool {
    menu_open || overlay_mounted
}
