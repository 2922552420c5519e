use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The orderable collections exposed by the content backend.
///
/// Kind only affects labels and content-file discovery; the reorder
/// engine treats every collection identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Top-level college cards on the landing screen.
    Colleges,
    /// Promoted highlight tiles.
    Highlights,
    /// Carousel images inside a page section.
    CarouselImages,
}

impl CollectionKind {
    /// Returns the canonical label used in tables and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Colleges => "Colleges",
            CollectionKind::Highlights => "Highlights",
            CollectionKind::CarouselImages => "Carousel Images",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    /// Parse a collection name as it appears in filenames or CLI arguments
    /// (case-insensitive, with/without separators).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "colleges" | "college" => Ok(CollectionKind::Colleges),
            "highlights" | "highlight" => Ok(CollectionKind::Highlights),
            "carousel_images" | "carousel" => Ok(CollectionKind::CarouselImages),
            _ => Err(format!("Unknown collection kind: {}", s)),
        }
    }
}

/// One entry of an ordered collection.
///
/// `index` is the persisted serve order. It may be absent on records
/// created before ordering was introduced; the reorder engine assigns a
/// positional default in that case. `payload` carries whatever the
/// backend stored alongside the item (logo, banner, media block) and is
/// never inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderableItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name", alias = "title")]
    pub label: String,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// A named ordered collection as loaded from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub kind: CollectionKind,
    pub items: Vec<OrderableItem>,
}

impl Collection {
    pub fn new(kind: CollectionKind, items: Vec<OrderableItem>) -> Self {
        Self { kind, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
