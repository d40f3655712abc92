//! The loaded work catalog and its fetch-or-fallback resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client performs a single `GET /api/works` per load. Whatever happens to
//! that request, [`Catalog::resolve`] always yields a non-empty catalog: a
//! usable remote list wins, anything else selects [`builtin_works`]. The reason
//! for a fallback is returned alongside so the caller can log it; it is never
//! shown to visitors.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::error::LoadError;
use crate::work::{Category, WorkId, WorkItem};

/// Where the current catalog came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The backend's work list.
    Remote,
    /// The demo list compiled into the site.
    #[default]
    Builtin,
}

/// Ordered list of works, replaced wholesale on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<WorkItem>,
    source: CatalogSource,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog made of the built-in demo works.
    #[must_use]
    pub fn builtin() -> Self {
        Self { items: builtin_works(), source: CatalogSource::Builtin }
    }

    /// Accept a remote work list.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] when the list has no works.
    pub fn from_remote(items: Vec<WorkItem>) -> Result<Self, LoadError> {
        if items.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { items: dedupe_ids(items), source: CatalogSource::Remote })
    }

    /// Resolve a fetch outcome into a catalog, falling back to the built-in
    /// works on any failure. The second value is the fallback reason.
    #[must_use]
    pub fn resolve(fetched: Result<Vec<WorkItem>, LoadError>) -> (Self, Option<LoadError>) {
        match fetched.and_then(Self::from_remote) {
            Ok(catalog) => (catalog, None),
            Err(reason) => (Self::builtin(), Some(reason)),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    #[must_use]
    pub fn source(&self) -> CatalogSource {
        self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a work by id.
    #[must_use]
    pub fn get(&self, id: &WorkId) -> Option<&WorkItem> {
        self.items.iter().find(|w| &w.id == id)
    }

    /// Categories present in the catalog, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for work in &self.items {
            if !seen.contains(&work.category) {
                seen.push(work.category.clone());
            }
        }
        seen
    }
}

fn dedupe_ids(items: Vec<WorkItem>) -> Vec<WorkItem> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|w| seen.insert(w.id.clone())).collect()
}

fn demo(
    id: i64,
    title: &str,
    category: Category,
    description: &str,
    images: &[&str],
    link: &str,
    tags: &[&str],
) -> WorkItem {
    let image = images.first().copied().unwrap_or_default().to_owned();
    WorkItem {
        id: WorkId::Num(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        image,
        images: (images.len() > 1).then(|| images.iter().map(|s| (*s).to_owned()).collect()),
        tags: tags.iter().map(|s| (*s).to_owned()).collect(),
        link: Some(link.to_owned()),
    }
}

const DESIGN_CHANNEL: &str = "https://t.me/dsgnportfromz2rbo";
const WORK_BOT: &str = "https://t.me/mkworkeerbot";

/// The demo portfolio shown whenever the backend has nothing usable.
#[must_use]
pub fn builtin_works() -> Vec<WorkItem> {
    vec![
        demo(
            1,
            "Course design",
            Category::Design,
            "A sales system earning 500,000+ RUB and 1,000+ new subscribers a month. Complete visuals for an \
             author's blog, from decks to covers.",
            &["images/course.jpg"],
            DESIGN_CHANNEL,
            &["Presentations", "Info products", "Visuals"],
        ),
        demo(
            2,
            "Website design",
            Category::Design,
            "VALUE home appliance store: catalog, promotions, cart and responsive layout. Landing pages and \
             multi-page sites for business.",
            &["images/site.jpg", "images/site-full.png"],
            DESIGN_CHANNEL,
            &["Websites", "E-commerce", "UI/UX"],
        ),
        demo(
            3,
            "Marketplace infographics",
            Category::Design,
            "Product cards and infographics for Wildberries: SEO, turnkey storefront, promotion, product research. \
             Complete marketplace styling.",
            &["images/wb-1.png", "images/wb-2.png", "images/wb-3.png", "images/wb-4.png", "images/wb-5.png"],
            DESIGN_CHANNEL,
            &["Wildberries", "Infographics", "Marketplace"],
        ),
        demo(
            4,
            "Checklists",
            Category::Design,
            "Checklist design for info products and bloggers. Clean styling, clear structure, print-ready PDF.",
            &["images/checklist-1.png", "images/checklist-2.png", "images/checklist-3.png", "images/checklist-4.png"],
            DESIGN_CHANNEL,
            &["Checklists", "Info products", "PDF"],
        ),
        demo(
            5,
            "Channel avatars",
            Category::Design,
            "Distinctive avatars for Telegram channels and YouTube in many styles, from minimalism to GTA and \
             neural art.",
            &["images/ava-genius.png", "images/ava-gta.png", "images/m1ndpeak.jpeg"],
            DESIGN_CHANNEL,
            &["Avatars", "Branding", "Style"],
        ),
        demo(
            6,
            "Banners and events",
            Category::Design,
            "Banners for social networks, Telegram channels and events. Bright visuals that catch the eye and \
             carry the mood.",
            &["images/banner.png", "images/event.png"],
            DESIGN_CHANNEL,
            &["Banners", "Events", "Social"],
        ),
        demo(
            7,
            "Reels editing",
            Category::Reels,
            "Viral clips for bloggers with millions of followers. Dynamic cuts, color grading, motion graphics. \
             Reels, Shorts, TikTok.",
            &["images/reels-1.png", "images/reels-2.png"],
            WORK_BOT,
            &["Reels", "Shorts", "Editing"],
        ),
        demo(
            8,
            "m1ndpeak channel",
            Category::Youtube,
            "15,000 subscribers in 10 videos. An original YouTube channel from scratch: idea, production, \
             shooting, editing, promotion.",
            &["images/m1ndpeak.jpeg"],
            "https://youtube.com/@m1ndpeak",
            &["YouTube", "15k subscribers", "Content"],
        ),
        demo(
            9,
            "Telegram bots",
            Category::Development,
            "Bots that automate a business: sales funnels, chat bots, payment integrations, broadcasts and \
             notifications.",
            &["images/bot.jpg", "images/bot-2.png"],
            WORK_BOT,
            &["Bots", "Automation", "Funnels"],
        ),
    ]
}
