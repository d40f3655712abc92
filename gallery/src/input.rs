//! Input model: navigation directions, lightbox key commands, swipe tracking
//! and the hit regions that decide which component a gesture belongs to.
//!
//! The browser layer reports raw values (key names, `screenX` at touch start
//! and end); everything here is a pure function of those values.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Step direction for carousels and lightbox navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Signed step: `-1` for [`Direction::Prev`], `+1` for [`Direction::Next`].
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }

    /// Parse a signed step as carried by `data-dir` attributes.
    #[must_use]
    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset.signum() {
            -1 => Some(Self::Prev),
            1 => Some(Self::Next),
            _ => None,
        }
    }

    /// Step `index` by one in this direction, wrapping modulo `len`.
    ///
    /// Returns `index` unchanged when `len` is zero.
    #[must_use]
    pub fn wrap(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return index;
        }
        match self {
            Self::Prev => (index % len + len - 1) % len,
            Self::Next => (index % len + 1) % len,
        }
    }
}

/// Action bound to a key while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate(Direction),
    Close,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value. Unbound keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Navigate(Direction::Prev)),
            "ArrowRight" => Some(Self::Navigate(Direction::Next)),
            "Escape" | "Esc" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Part of the open lightbox a touch started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The nested image carousel of a multi-image work.
    Carousel,
    /// Everything else in the lightbox body.
    Body,
}

/// Tracks one horizontal swipe from touch start to touch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Tracker that fires once a swipe exceeds `threshold` pixels.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, start_x: None }
    }

    /// Record the touch start position.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Forget a pending swipe (touch cancelled or handed to another region).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finish the swipe at `x`.
    ///
    /// A rightward drag goes to the previous slide, leftward to the next.
    /// Drags within the threshold, or without a recorded start, yield `None`.
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let diff = x - start;
        if diff.abs() <= self.threshold {
            return None;
        }
        Some(if diff > 0.0 { Direction::Prev } else { Direction::Next })
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
