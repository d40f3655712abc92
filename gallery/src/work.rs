//! Portfolio work items and category styling.
//!
//! A [`WorkItem`] is immutable once loaded. Rows coming from the backend may
//! carry extra columns (`created_at`) or an empty `image`; both are tolerated
//! so that a partially filled catalog still renders.

#[cfg(test)]
#[path = "work_test.rs"]
mod work_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CATEGORY_COLOR;

/// Identifier of a work, unique within a loaded catalog.
///
/// The backend issues integers; hand-written catalogs may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkId {
    Num(i64),
    Text(String),
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for WorkId {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for WorkId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Work category. Drives filter membership and the badge label/color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Design,
    Reels,
    Youtube,
    Development,
    Marketing,
    /// Any category the site has no style for; keeps the raw value.
    Other(String),
}

/// Badge label and accent color for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
}

impl Category {
    /// Categories offered as filter buttons, in display order.
    pub const KNOWN: [Category; 5] =
        [Category::Design, Category::Reels, Category::Youtube, Category::Development, Category::Marketing];

    /// Wire value of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Design => "design",
            Self::Reels => "reels",
            Self::Youtube => "youtube",
            Self::Development => "development",
            Self::Marketing => "marketing",
            Self::Other(raw) => raw,
        }
    }

    /// Style for known categories; `None` for [`Category::Other`].
    #[must_use]
    pub fn style(&self) -> Option<CategoryStyle> {
        let style = match self {
            Self::Design => CategoryStyle { label: "Design", color: "#6366f1" },
            Self::Reels => CategoryStyle { label: "Reels", color: "#ef4444" },
            Self::Youtube => CategoryStyle { label: "YouTube", color: "#ff0000" },
            Self::Development => CategoryStyle { label: "Development", color: "#0088cc" },
            Self::Marketing => CategoryStyle { label: "Marketing", color: "#10b981" },
            Self::Other(_) => return None,
        };
        Some(style)
    }

    /// Display label, falling back to the raw category string.
    #[must_use]
    pub fn label(&self) -> &str {
        self.style().map_or_else(|| self.as_str(), |s| s.label)
    }

    /// Accent color, falling back to [`DEFAULT_CATEGORY_COLOR`].
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.style().map_or(DEFAULT_CATEGORY_COLOR, |s| s.color)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw {
            "design" => Self::Design,
            "reels" => Self::Reels,
            "youtube" => Self::Youtube,
            "development" => Self::Development,
            "marketing" => Self::Marketing,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkId,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

fn null_as_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl WorkItem {
    /// Whether the item shows a carousel. A single-element `images` list is a
    /// plain single-image item, not a one-slide carousel.
    #[must_use]
    pub fn is_carousel(&self) -> bool {
        self.images.as_ref().is_some_and(|images| images.len() > 1)
    }

    /// Image shown when the item is not a carousel.
    ///
    /// `image` wins; an empty `image` falls back to `images[0]`.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        if !self.image.is_empty() {
            return &self.image;
        }
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map_or("", String::as_str)
    }

    /// Ordered slides: all `images` for carousels, else the primary image.
    #[must_use]
    pub fn slides(&self) -> Vec<&str> {
        match &self.images {
            Some(images) if images.len() > 1 => images.iter().map(String::as_str).collect(),
            _ => vec![self.primary_image()],
        }
    }

    /// Number of slides in [`WorkItem::slides`].
    #[must_use]
    pub fn slide_count(&self) -> usize {
        match &self.images {
            Some(images) if images.len() > 1 => images.len(),
            _ => 1,
        }
    }

    /// Description cut to `max_chars` characters with a trailing `...`.
    #[must_use]
    pub fn description_preview(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let mut preview: String = self.description.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}
