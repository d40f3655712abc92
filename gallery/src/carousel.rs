//! Cyclic image index used by card carousels and the lightbox carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::input::Direction;
use crate::work::WorkItem;

/// Position within a multi-image work. Always has at least two slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` slides, starting at slide 0.
    ///
    /// Returns `None` for fewer than two slides: a single image is not a carousel.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 1).then_some(Self { index: 0, len })
    }

    /// Carousel for a work, if it has more than one image.
    #[must_use]
    pub fn for_item(work: &WorkItem) -> Option<Self> {
        if work.is_carousel() { Self::new(work.slide_count()) } else { None }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advance one slide, wrapping at either end.
    pub fn step(&mut self, direction: Direction) {
        self.index = direction.wrap(self.index, self.len);
    }

    /// Jump to a slide (dot click). Out-of-range targets wrap.
    pub fn go_to(&mut self, index: usize) {
        self.index = index % self.len;
    }

    /// Whether slide `index` is the one on display.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// One-based position counter, e.g. `2/5`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }
}
