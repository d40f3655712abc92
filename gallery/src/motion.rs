//! Motion math for the page's decorative effects.
//!
//! Nothing here is load-bearing: these are the numbers behind card stagger,
//! stats count-up, cursor easing, tilt, reveal-on-scroll and the scroll
//! progress bar. The client drives them from timers and scroll events.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{
    CARD_STAGGER_MS, COUNT_UP_MS, FRAME_MS, HEADER_SCROLLED_PX, MAGNETIC_STRENGTH, REVEAL_MARGIN_PX, TILT_DIVISOR,
    TITLE_REVEAL_BASE_MS, TITLE_REVEAL_STEP_MS,
};

/// Entrance delay of the card at `index`. Strictly increasing with index.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(CARD_STAGGER_MS))
}

/// Reveal delay of the hero title line at `index`.
#[must_use]
pub fn title_reveal_delay_ms(index: usize) -> u32 {
    let step = u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(TITLE_REVEAL_STEP_MS));
    TITLE_REVEAL_BASE_MS.saturating_add(step)
}

/// Whether the header uses its compact "scrolled" style.
#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_PX
}

/// Whether an element whose top edge is at `element_top` (viewport
/// coordinates) has scrolled far enough into view to reveal.
#[must_use]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN_PX
}

/// Scroll progress in percent, clamped to `0..=100`.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical parallax offset for an element scrolling at `speed`.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// Card tilt in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// relative to a `width × height` card.
#[must_use]
pub fn tilt(width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    ((y - height / 2.0) / TILT_DIVISOR, (width / 2.0 - x) / TILT_DIVISOR)
}

/// Translation of a magnetic button toward a pointer at `(x, y)` relative to
/// its top-left corner.
#[must_use]
pub fn magnetic_offset(width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    ((x - width / 2.0) * MAGNETIC_STRENGTH, (y - height / 2.0) * MAGNETIC_STRENGTH)
}

/// Eased point that chases a target, one frame at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
    ease: f64,
}

impl Follower {
    /// Follower at the origin moving `ease` of the remaining distance per frame.
    #[must_use]
    pub fn new(ease: f64) -> Self {
        Self { x: 0.0, y: 0.0, ease: ease.clamp(0.0, 1.0) }
    }

    /// Advance one frame toward `(target_x, target_y)`.
    pub fn step(&mut self, target_x: f64, target_y: f64) {
        self.x += (target_x - self.x) * self.ease;
        self.y += (target_y - self.y) * self.ease;
    }
}

/// Stats counter that counts up to `target` over [`COUNT_UP_MS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u32,
    current: f64,
    increment: f64,
    done: bool,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u32) -> Self {
        let frames = f64::from(COUNT_UP_MS) / f64::from(FRAME_MS);
        Self { target, current: 0.0, increment: f64::from(target) / frames, done: target == 0 }
    }

    /// Advance one frame. Returns `false` once the final value is reached.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.done = true;
        }
        !self.done
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Text to display: the floored running value, then `target+` when done.
    #[must_use]
    pub fn label(&self) -> String {
        if self.done {
            return format!("{}+", self.target);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shown = self.current.floor().max(0.0) as u32;
        shown.to_string()
    }
}
