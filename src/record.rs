use serde::{Deserialize, Serialize};

/// A bookmark record as supplied by the surrounding application.
///
/// `id`, `title` and `url` are always present; the AI-derived fields and the
/// folder path are optional and contribute no terms when absent. Field names
/// follow the camelCase wire format of the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
}

impl Bookmark {
    /// Convenience constructor for the required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Bookmark {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            ai_summary: None,
            ai_tags: None,
            ai_category: None,
            folder_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let json = r#"{
            "id": "b1",
            "title": "MySQL tuning",
            "url": "https://example.com",
            "aiSummary": "notes on indexes",
            "aiTags": ["mysql", "performance"],
            "aiCategory": "Development",
            "folderPath": "tech/databases"
        }"#;
        let b: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(b.ai_summary.as_deref(), Some("notes on indexes"));
        assert_eq!(b.ai_tags.as_ref().unwrap().len(), 2);
        assert_eq!(b.folder_path.as_deref(), Some("tech/databases"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{"id": "b2", "title": "Plain", "url": "https://example.org"}"#;
        let b: Bookmark = serde_json::from_str(json).unwrap();
        assert!(b.ai_summary.is_none());
        assert!(b.ai_tags.is_none());
        assert!(b.ai_category.is_none());
        assert!(b.folder_path.is_none());
    }
}
