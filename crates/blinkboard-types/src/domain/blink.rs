use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A blink: the listed NFT/post item rendered in the dashboard grid.
///
/// Engagement counters (likes, shares, comments, views) start at zero for
/// freshly created blinks and only ever grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blink {
    /// Unique identifier, stable across the blink's lifetime.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL for card rendering, if one was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub views: u64,
}

impl Record for Blink {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn sort_key(&self) -> f64 {
        self.likes as f64
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// User-supplied fields for a new blink; everything else is assigned by the
/// data source (id, timestamp, zeroed counters).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlinkDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl BlinkDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Blink {
        Blink {
            id: "1".to_string(),
            name: "Underdog Rebel".to_string(),
            description: "A fierce and determined Underdog Blink".to_string(),
            image: None,
            created_at: Utc::now(),
            likes: 42,
            shares: 15,
            comments: 8,
            views: 230,
        }
    }

    #[test]
    fn test_blink_sorts_by_likes() {
        let blink = sample();
        assert_eq!(blink.sort_key(), 42.0);
    }

    #[test]
    fn test_blink_search_fields_cover_name_and_description() {
        let blink = sample();
        let fields = blink.searchable_fields();
        assert_eq!(fields, vec![blink.name.as_str(), blink.description.as_str()]);
    }

    #[test]
    fn test_missing_image_is_omitted_from_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["likes"], 42);
    }
}
