//! Artwork models: the raw API shape and the normalized record.
//!
//! The collection API emits empty strings rather than omitting keys, so the
//! raw view defaults every field and the normalizer decides what counts as
//! present.

use serde::{Deserialize, Serialize};

/// Sentinel artist for records without an attribution.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Sentinel department when the API leaves it blank.
pub const DEFAULT_DEPARTMENT: &str = "The Metropolitan Museum of Art";

/// Listing/search payload: `{"total": N, "objectIDs": [...]}`.
///
/// The API returns `"objectIDs": null` for zero hits, hence the `Option`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectIds {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

impl ObjectIds {
    /// The listed IDs, empty when the API reported none.
    pub fn into_ids(self) -> Vec<u64> {
        self.object_ids.unwrap_or_default()
    }
}

/// Raw detail record from `GET /objects/{id}`.
///
/// Only the fields the normalizer projects; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub title: String,
    pub artist_display_name: String,
    pub department: String,
    pub primary_image: String,
    pub primary_image_small: String,
    pub culture: String,
    pub object_date: String,
    pub medium: String,
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

/// Normalized artwork record handed to the presentation layer.
///
/// Immutable once constructed; a flat list of these is the sole unit
/// exchanged with rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkRecord {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub department: String,
    /// Prefers the small/preview image, falls back to the full one.
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Link to the object's page on the museum site, when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_url: Option<String>,
}

impl ArtworkRecord {
    /// Normalize one raw object, or `None` when it is unusable.
    ///
    /// A record needs both a title and a primary image to be displayable;
    /// anything else is dropped from every result set, fallback included.
    pub fn from_object(raw: MetObject) -> Option<Self> {
        if raw.title.trim().is_empty() || raw.primary_image.trim().is_empty() {
            return None;
        }

        let image_url = if raw.primary_image_small.trim().is_empty() {
            raw.primary_image.trim().to_string()
        } else {
            raw.primary_image_small.trim().to_string()
        };

        Some(Self {
            id: raw.object_id,
            title: raw.title.trim().to_string(),
            artist: non_empty(raw.artist_display_name)
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            department: non_empty(raw.department)
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
            image_url,
            culture: non_empty(raw.culture),
            date: non_empty(raw.object_date),
            medium: non_empty(raw.medium),
            object_url: non_empty(raw.object_url),
        })
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
