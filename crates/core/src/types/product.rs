//! Catalog record type.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One record in the catalog feed.
///
/// Records are immutable once fetched; identity is [`ProductRecord::id`].
/// The portal reads a fresh snapshot of the feed per protected-page visit
/// and never mutates or caches it. Field names follow the feed's JSON
/// casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique, stable identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Where the card/detail image lives.
    pub image_url: String,
    /// Where the asset itself is downloaded from.
    pub download_url: String,
    /// Optional rich-text details in markdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Optional guidance video link (share or embed form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_feed_shape() {
        let raw = r###"{
            "id": "meal-planner",
            "name": "Meal Planner",
            "description": "A weekly planning template.",
            "imageUrl": "/static/images/meal-planner.jpg",
            "downloadUrl": "/downloads/meal-planner.zip",
            "details": "## Setup\nUnzip and open.",
            "videoUrl": "https://www.loom.com/share/abc123"
        }"###;

        let record: ProductRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, ProductId::from("meal-planner"));
        assert_eq!(record.name, "Meal Planner");
        assert!(record.details.is_some());
        assert!(record.video_url.is_some());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let raw = r#"{
            "id": "checklist",
            "name": "Checklist",
            "description": "A one-page checklist.",
            "imageUrl": "/static/images/checklist.jpg",
            "downloadUrl": "/downloads/checklist.pdf"
        }"#;

        let record: ProductRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.details, None);
        assert_eq!(record.video_url, None);
    }
}
