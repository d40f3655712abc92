//! Filter and pagination over the catalog.
//!
//! DESIGN
//! ======
//! `ViewState` keeps its own copy of the filtered works so the lightbox can
//! navigate "the current filtered list" without reaching back into the
//! catalog. Every filter change rebuilds it from scratch; nothing is patched
//! incrementally.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::catalog::Catalog;
use crate::consts::PAGE_SIZE;
use crate::work::{Category, WorkItem};

/// Active grid filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Whether `work` belongs to the filtered list.
    #[must_use]
    pub fn matches(&self, work: &WorkItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &work.category == category,
        }
    }

    /// Value used by filter buttons (`all` or the category).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }
}

impl From<&str> for Filter {
    fn from(raw: &str) -> Self {
        if raw == "all" { Self::All } else { Self::Category(Category::from(raw)) }
    }
}

/// Filtered, paginated projection of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    filter: Filter,
    page: usize,
    page_size: usize,
    filtered: Vec<WorkItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&Catalog::default())
    }
}

impl ViewState {
    /// Unfiltered first page of `catalog` with the standard page size.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_page_size(catalog, PAGE_SIZE)
    }

    /// Unfiltered first page with a custom page size (minimum 1).
    #[must_use]
    pub fn with_page_size(catalog: &Catalog, page_size: usize) -> Self {
        let mut view = Self { filter: Filter::All, page: 1, page_size: page_size.max(1), filtered: Vec::new() };
        view.recompute(catalog);
        view
    }

    /// Select a filter: resets to the first page and rebuilds the filtered list.
    pub fn set_filter(&mut self, catalog: &Catalog, filter: Filter) {
        self.filter = filter;
        self.page = 1;
        self.recompute(catalog);
    }

    /// Re-apply the active filter to a freshly loaded catalog, back on page 1.
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.page = 1;
        self.recompute(catalog);
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    fn recompute(&mut self, catalog: &Catalog) {
        self.filtered = catalog.items().iter().filter(|w| self.filter.matches(w)).cloned().collect();
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// All works matching the filter, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> &[WorkItem] {
        &self.filtered
    }

    /// `min(page * page_size, filtered.len())`.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.page.saturating_mul(self.page_size).min(self.filtered.len())
    }

    /// The works currently on the grid.
    #[must_use]
    pub fn visible(&self) -> &[WorkItem] {
        &self.filtered[..self.visible_count()]
    }

    /// Whether the "load more" control is shown.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible_count() < self.filtered.len()
    }

    /// Whether the grid shows the empty-state placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
