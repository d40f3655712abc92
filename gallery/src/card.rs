//! Pure projection of a work into what its grid card displays.
//!
//! Cards hold no state of their own beyond the inline carousel index, which
//! lives in the rendering layer and never touches the grid view.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::consts::DESCRIPTION_PREVIEW_CHARS;
use crate::work::{WorkId, WorkItem};

/// Inline SVG shown in place of an image that failed to load.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22400%22 \
    height=%22300%22%3E%3Crect fill=%22%231a1a2e%22 width=%22100%25%22 height=%22100%25%22/%3E%3Ctext x=%2250%25%22 \
    y=%2250%25%22 fill=%22%23666%22 text-anchor=%22middle%22 dy=%22.3em%22%3EImage%3C/text%3E%3C/svg%3E";

/// One image of a card or lightbox carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

/// Everything a grid card renders for one work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: WorkId,
    pub title: String,
    pub category: String,
    pub category_label: String,
    pub category_color: &'static str,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    /// Single image, or every slide for carousel works.
    pub slides: Vec<Slide>,
}

impl CardModel {
    #[must_use]
    pub fn from_item(work: &WorkItem) -> Self {
        Self {
            id: work.id.clone(),
            title: work.title.clone(),
            category: work.category.as_str().to_owned(),
            category_label: work.category.label().to_owned(),
            category_color: work.category.color(),
            description: work.description_preview(DESCRIPTION_PREVIEW_CHARS),
            tags: work.tags.clone(),
            link: work.link.clone(),
            slides: slides_for(work),
        }
    }

    /// Whether the card renders an inline carousel.
    #[must_use]
    pub fn is_carousel(&self) -> bool {
        self.slides.len() > 1
    }
}

/// Slides with alt text: `"<title> <n>"` for carousels, the bare title otherwise.
#[must_use]
pub fn slides_for(work: &WorkItem) -> Vec<Slide> {
    let carousel = work.is_carousel();
    work.slides()
        .into_iter()
        .enumerate()
        .map(|(i, src)| Slide {
            src: src.to_owned(),
            alt: if carousel { format!("{} {}", work.title, i + 1) } else { work.title.clone() },
        })
        .collect()
}

/// `src` to use for an image, substituting the placeholder for blank paths.
#[must_use]
pub fn image_src(src: &str) -> &str {
    if src.trim().is_empty() { FALLBACK_IMAGE } else { src }
}

/// What a click on a card landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card surface, image or text.
    Body,
    /// Carousel arrow or dot.
    CarouselControl,
    /// The work's external link.
    ExternalLink,
}

impl ClickTarget {
    /// Only clicks on the card body open the lightbox.
    #[must_use]
    pub fn opens_lightbox(self) -> bool {
        matches!(self, Self::Body)
    }
}

/// CSS selectors whose matches count as [`ClickTarget`]s other than the body,
/// checked against the click target with `closest`.
pub const CAROUSEL_CONTROL_SELECTOR: &str = ".carousel-btn, .carousel-dot";
pub const EXTERNAL_LINK_SELECTOR: &str = ".work-external-link";
