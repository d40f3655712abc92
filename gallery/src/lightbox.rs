//! Lightbox state machine.
//!
//! States are `Closed`, `Open` and `Closing`. The open state stores a
//! *position* in the filtered list, not a work id, so navigation always walks
//! whatever list is filtered at the time. Each open starts a new session; the
//! deferred teardown after a close only applies to the session that started
//! it, so reopening during the close transition never loses the new overlay.
//!
//! Every operation takes the filtered list as an argument and is a no-op in
//! states where it has no meaning; the browser layer can forward events
//! without checking state first.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::carousel::Carousel;
use crate::input::{Direction, HitRegion, KeyCommand};
use crate::work::{WorkId, WorkItem};

/// Display state of the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenView {
    /// Position of the displayed work in the filtered list.
    pub index: usize,
    /// Nested carousel for multi-image works.
    pub carousel: Option<Carousel>,
    /// Zoomed presentation of a single image.
    pub zoomed: bool,
    /// Direction of the last navigation, for the slide transition.
    pub last_direction: Option<Direction>,
}

impl OpenView {
    fn at(index: usize, filtered: &[WorkItem]) -> Self {
        Self {
            index,
            carousel: filtered.get(index).and_then(Carousel::for_item),
            zoomed: false,
            last_direction: None,
        }
    }
}

/// Lightbox lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(OpenView),
    /// Close transition running; overlay still mounted and still showing
    /// the last open view.
    Closing { session: u64, view: OpenView },
}

/// What a lightbox input did, for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEffect {
    /// Outer navigation moved to another work.
    Navigated(Direction),
    /// The nested carousel moved.
    SlideChanged,
    /// The close transition started for this session.
    Closing(u64),
}

/// Lightbox controller owning the state and the session counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    state: LightboxState,
    session: u64,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Session of the current (or last) open.
    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Whether the overlay should be in the DOM (open or closing).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !matches!(self.state, LightboxState::Closed)
    }

    /// Open view, if open.
    #[must_use]
    pub fn view(&self) -> Option<&OpenView> {
        match &self.state {
            LightboxState::Open(view) => Some(view),
            _ => None,
        }
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.view().map(|v| v.index)
    }

    /// View on screen, open or closing.
    #[must_use]
    pub fn shown_view(&self) -> Option<&OpenView> {
        match &self.state {
            LightboxState::Closed => None,
            LightboxState::Open(view) | LightboxState::Closing { view, .. } => Some(view),
        }
    }

    #[must_use]
    pub fn carousel(&self) -> Option<Carousel> {
        self.shown_view().and_then(|v| v.carousel)
    }

    #[must_use]
    pub fn zoomed(&self) -> bool {
        self.shown_view().is_some_and(|v| v.zoomed)
    }

    /// The displayed work. Stays available through the close transition.
    #[must_use]
    pub fn current<'a>(&self, filtered: &'a [WorkItem]) -> Option<&'a WorkItem> {
        self.shown_view().and_then(|v| filtered.get(v.index))
    }

    /// Position counter, e.g. `3 / 9`.
    #[must_use]
    pub fn counter_label(&self, filtered: &[WorkItem]) -> Option<String> {
        self.shown_view().map(|v| format!("{} / {}", v.index + 1, filtered.len()))
    }

    /// Whether prev/next controls are shown.
    #[must_use]
    pub fn can_navigate(filtered: &[WorkItem]) -> bool {
        filtered.len() > 1
    }

    /// Open the work with `id`. Unknown ids leave the state unchanged.
    ///
    /// Returns the new session on success.
    pub fn open(&mut self, id: &WorkId, filtered: &[WorkItem]) -> Option<u64> {
        let index = filtered.iter().position(|w| &w.id == id)?;
        self.session += 1;
        self.state = LightboxState::Open(OpenView::at(index, filtered));
        Some(self.session)
    }

    /// Move to the neighbouring work, wrapping. No-op with one or zero works.
    ///
    /// The nested carousel restarts at slide 0 and zoom resets.
    pub fn navigate(&mut self, direction: Direction, filtered: &[WorkItem]) -> Option<LightboxEffect> {
        let LightboxState::Open(view) = &mut self.state else {
            return None;
        };
        if filtered.len() <= 1 {
            return None;
        }
        let index = direction.wrap(view.index, filtered.len());
        *view = OpenView { last_direction: Some(direction), ..OpenView::at(index, filtered) };
        Some(LightboxEffect::Navigated(direction))
    }

    /// Step the nested carousel. No-op for single-image works.
    pub fn step_carousel(&mut self, direction: Direction) -> Option<LightboxEffect> {
        let carousel = self.carousel_mut()?;
        carousel.step(direction);
        Some(LightboxEffect::SlideChanged)
    }

    /// Jump the nested carousel to a slide (dot click).
    pub fn go_to_slide(&mut self, index: usize) -> Option<LightboxEffect> {
        let carousel = self.carousel_mut()?;
        carousel.go_to(index);
        Some(LightboxEffect::SlideChanged)
    }

    fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.state {
            LightboxState::Open(view) => view.carousel.as_mut(),
            _ => None,
        }
    }

    /// Toggle zoom on a single-image work. Returns the new zoom flag.
    pub fn toggle_zoom(&mut self) -> Option<bool> {
        let LightboxState::Open(view) = &mut self.state else {
            return None;
        };
        if view.carousel.is_some() {
            return None;
        }
        view.zoomed = !view.zoomed;
        Some(view.zoomed)
    }

    /// Start closing. Returns the session to hand to [`Lightbox::finish_close`]
    /// once the close transition has run.
    pub fn close(&mut self) -> Option<u64> {
        let view = *self.view()?;
        self.state = LightboxState::Closing { session: self.session, view };
        Some(self.session)
    }

    /// Complete a close. Ignored if the lightbox was reopened since.
    pub fn finish_close(&mut self, session: u64) -> bool {
        match self.state {
            LightboxState::Closing { session: closing, .. } if closing == session => {
                self.state = LightboxState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Apply a keyboard key. Keys only act while open.
    pub fn handle_key(&mut self, key: &str, filtered: &[WorkItem]) -> Option<LightboxEffect> {
        if !self.is_open() {
            return None;
        }
        match KeyCommand::from_key(key)? {
            KeyCommand::Navigate(direction) => self.navigate(direction, filtered),
            KeyCommand::Close => self.close().map(LightboxEffect::Closing),
        }
    }

    /// Apply a completed swipe that started in `region`.
    ///
    /// Swipes inside the nested carousel drive only the carousel; all others
    /// navigate between works.
    pub fn handle_swipe(
        &mut self,
        region: HitRegion,
        direction: Direction,
        filtered: &[WorkItem],
    ) -> Option<LightboxEffect> {
        match region {
            HitRegion::Carousel if self.carousel().is_some() => self.step_carousel(direction),
            _ => self.navigate(direction, filtered),
        }
    }
}
