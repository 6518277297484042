//! Persistence record shapes for drafts and published posts
//!
//! These are the logical rows the console stores: a draft as entered in the
//! editor, and the assembled record that goes to table storage. Actual
//! storage I/O belongs to the hosting application; this crate only builds
//! the values.

use crate::markdown_exporter::ImageRef;
use serde::{Deserialize, Serialize};

/// A post as captured from an editing session.
///
/// `content` holds the serialized editor state verbatim (or raw text for
/// content that predates the editor). The optional fields are user
/// overrides; when absent the pipeline fills them from computed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Record identifier; derived from the title slug when absent
    #[serde(default)]
    pub id: Option<String>,

    /// Post title as entered
    pub title: String,

    /// Serialized content exactly as the editor produced it
    pub content: String,

    /// Media attached during the session, in insertion order
    #[serde(default)]
    pub images: Vec<ImageRef>,

    /// User override for the listing description; excerpt when absent
    #[serde(default)]
    pub description: Option<String>,

    /// Featured image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Display date for the post
    #[serde(default)]
    pub date: Option<String>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// SEO title override
    #[serde(default)]
    pub meta_title: Option<String>,

    /// SEO description override
    #[serde(default)]
    pub meta_description: Option<String>,
}

/// The assembled record for one post, ready for storage.
///
/// Draft records carry the serialized editor state in `content` and no
/// publish timestamp; published records carry projected Markdown and a
/// timestamp. Derived fields are recomputed on every save and stored for
/// listing screens only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Record identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// URL slug derived from the title
    pub slug: String,

    /// Listing description (user override or computed excerpt)
    pub description: String,

    /// Serialized editor state (draft) or projected Markdown (published)
    pub content: String,

    /// Featured image URL
    pub image_url: Option<String>,

    /// Display date for the post
    pub date: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// SEO title
    pub meta_title: Option<String>,

    /// SEO description
    pub meta_description: Option<String>,

    /// Computed word count
    pub word_count: usize,

    /// Computed reading time, in minutes
    pub reading_time_minutes: u32,

    /// Publish timestamp; `None` while the post is a draft
    pub published_at: Option<String>,
}

impl PostRecord {
    /// Whether this record represents a published post.
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_with_minimal_fields() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"title": "Hi", "content": "some text"}"#).unwrap();
        assert_eq!(draft.title, "Hi");
        assert!(draft.id.is_none());
        assert!(draft.images.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_record_roundtrip() {
        let record = PostRecord {
            id: "hello".to_string(),
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            description: "greeting".to_string(),
            content: "# Hello".to_string(),
            image_url: None,
            date: Some("2025-06-20".to_string()),
            tags: vec!["intro".to_string()],
            meta_title: None,
            meta_description: None,
            word_count: 1,
            reading_time_minutes: 1,
            published_at: Some("2025-06-20".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.is_published());
    }
}
