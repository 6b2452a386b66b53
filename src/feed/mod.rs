pub mod rss;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Channel-level metadata plus the parsed items, in document order.
///
/// Every field is optional: an element that is missing or has empty text
/// simply does not appear in the record. Absent fields are omitted from the
/// JSON serialization rather than emitted as nulls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        rename = "lastBuildDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_build_date: Option<String>,
    #[serde(default, rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Every distinct `<category>` text under the channel, including the
    /// ones inside items, in first-occurrence order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(
        default,
        rename = "managingEditor",
        skip_serializing_if = "Option::is_none"
    )]
    pub managing_editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemRecord>,
}

/// One `<item>` of the channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemRecord {
    /// True when no recognized field is present. Such items are dropped
    /// from the listing instead of showing up as empty blocks.
    pub fn is_blank(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.pub_date.is_none()
            && self.link.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Everything that can go wrong before a record exists. The `Display`
/// output is the single diagnostic line the program prints in place of the
/// feed; none of these variants terminates the program.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("An error occurred while requesting the URL: {0}")]
    Fetch(String),
    #[error("An error occurred while parsing XML: {0}")]
    Parse(String),
    #[error("An unexpected error occurred while reading the feed: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_sparse_record() {
        let record = FeedRecord {
            title: Some("Example".to_string()),
            link: Some("http://x.test".to_string()),
            description: Some("d".to_string()),
            ..FeedRecord::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: FeedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let record = FeedRecord {
            title: Some("Example".to_string()),
            ..FeedRecord::default()
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["title"], "Example");
    }

    #[test]
    fn test_json_field_names_match_rss_spelling() {
        let record = FeedRecord {
            last_build_date: Some("Mon, 01 Jan 2024 00:00:00 +0000".to_string()),
            pub_date: Some("Mon, 01 Jan 2024 00:00:00 +0000".to_string()),
            managing_editor: Some("editor@example.com".to_string()),
            ..FeedRecord::default()
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("lastBuildDate"));
        assert!(object.contains_key("pubDate"));
        assert!(object.contains_key("managingEditor"));
    }

    #[test]
    fn test_blank_item_detection() {
        assert!(ItemRecord::default().is_blank());
        assert!(!ItemRecord {
            link: Some("http://x.test/post".to_string()),
            ..ItemRecord::default()
        }
        .is_blank());
    }
}
