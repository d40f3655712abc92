//! Gallery state: catalog, filtered view and lightbox in one signal.
//!
//! DESIGN
//! ======
//! The three gallery models are kept together because every lightbox
//! operation needs the current filtered list, and every catalog reload must
//! rebuild the view and invalidate the lightbox position. Methods here are
//! thin compositions of `gallery` transitions; no rendering concerns.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use gallery::catalog::Catalog;
use gallery::error::LoadError;
use gallery::input::{Direction, HitRegion};
use gallery::lightbox::{Lightbox, LightboxEffect};
use gallery::view::{Filter, ViewState};
use gallery::work::{WorkId, WorkItem};

/// Catalog, view and lightbox for the works section.
#[derive(Clone, Debug)]
pub struct GalleryState {
    pub catalog: Catalog,
    pub view: ViewState,
    pub lightbox: Lightbox,
    /// A catalog request is in flight.
    pub loading: bool,
    /// Why the last load fell back to the built-in works, if it did.
    pub fallback: Option<LoadError>,
    /// Bumped whenever the grid's card set is rebuilt; restarts the entrance stagger.
    pub grid_epoch: u64,
    /// Filter change fade-out is running.
    pub fading: bool,
    /// Last filter requested during the fade-out, applied when it ends.
    pub pending_filter: Option<Filter>,
}

impl Default for GalleryState {
    fn default() -> Self {
        let catalog = Catalog::default();
        let view = ViewState::new(&catalog);
        Self {
            catalog,
            view,
            lightbox: Lightbox::new(),
            loading: true,
            fallback: None,
            grid_epoch: 0,
            fading: false,
            pending_filter: None,
        }
    }
}

impl GalleryState {
    /// Install the outcome of a catalog fetch.
    ///
    /// The active filter is re-applied on page 1. An open lightbox starts
    /// closing, since its position referred to the old list.
    pub fn apply_load(&mut self, fetched: Result<Vec<WorkItem>, LoadError>) {
        let (catalog, fallback) = Catalog::resolve(fetched);
        self.catalog = catalog;
        match self.pending_filter.take() {
            Some(filter) => self.view.set_filter(&self.catalog, filter),
            None => self.view.refresh(&self.catalog),
        }
        self.lightbox.close();
        self.loading = false;
        self.fallback = fallback;
        self.fading = false;
        self.grid_epoch += 1;
    }

    /// Select a filter. Returns `false` if it was already active.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.view.filter() == &filter {
            return false;
        }
        self.view.set_filter(&self.catalog, filter);
        self.fading = false;
        self.grid_epoch += 1;
        true
    }

    /// Filter the grid is showing or fading towards.
    pub fn target_filter(&self) -> &Filter {
        self.pending_filter.as_ref().unwrap_or_else(|| self.view.filter())
    }

    /// Ask for a filter behind the fade-out. Later requests replace earlier
    /// ones until [`GalleryState::commit_filter`] runs.
    ///
    /// Returns `true` when this request started the fade and the caller must
    /// schedule the commit.
    pub fn request_filter(&mut self, filter: Filter) -> bool {
        if self.target_filter() == &filter {
            return false;
        }
        let started = self.pending_filter.is_none();
        self.pending_filter = Some(filter);
        self.fading = true;
        started
    }

    /// End the fade-out and apply the last requested filter.
    pub fn commit_filter(&mut self) -> bool {
        self.fading = false;
        self.pending_filter.take().is_some_and(|filter| self.set_filter(filter))
    }

    pub fn load_more(&mut self) {
        self.view.load_more();
    }

    /// Open the lightbox on a card. Returns the new session.
    pub fn open_work(&mut self, id: &WorkId) -> Option<u64> {
        self.lightbox.open(id, self.view.filtered())
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<LightboxEffect> {
        self.lightbox.navigate(direction, self.view.filtered())
    }

    pub fn handle_key(&mut self, key: &str) -> Option<LightboxEffect> {
        self.lightbox.handle_key(key, self.view.filtered())
    }

    pub fn handle_swipe(&mut self, region: HitRegion, direction: Direction) -> Option<LightboxEffect> {
        self.lightbox.handle_swipe(region, direction, self.view.filtered())
    }

    /// Work shown in the lightbox.
    pub fn current_work(&self) -> Option<&WorkItem> {
        self.lightbox.current(self.view.filtered())
    }

    pub fn counter_label(&self) -> Option<String> {
        self.lightbox.counter_label(self.view.filtered())
    }

    /// Whether the lightbox shows prev/next controls.
    pub fn can_navigate(&self) -> bool {
        Lightbox::can_navigate(self.view.filtered())
    }

    /// Session of the close transition in progress, if any.
    pub fn closing_session(&self) -> Option<u64> {
        match self.lightbox.state() {
            gallery::lightbox::LightboxState::Closing { session, .. } => Some(session),
            _ => None,
        }
    }
}
