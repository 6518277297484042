//! Content model for editable rich content
//!
//! This module defines the neutral tree representation a draft is edited
//! in, the tolerant parser for its serialized form, and the pre-publish
//! validation gate. The tree is deliberately decoupled from any specific
//! editor widget: any editor that can emit and consume this shape can sit
//! in front of the pipeline.

// Submodules
mod blocks;
mod error;
mod inline;
mod parser;
mod validation;

// Re-export public types
pub use blocks::{Block, Document, ListItem};
pub use error::DraftParseError;
pub use inline::{FormatFlags, Inline};
pub use parser::{parse_document, to_serialized};
pub use validation::{validate_for_publish, ValidationError, MIN_PLAIN_TEXT_CHARS};

/// A content snapshot as handed to the pipeline.
///
/// Drafts normally parse into a [`Document`] tree. Content that cannot be
/// interpreted as a tree (hand-written text, a corrupted row, a draft from
/// before the editor switch) is carried as plain text instead, and every
/// downstream operation is defined on both forms. The conversion never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A parsed document tree
    Document(Document),
    /// Raw text kept verbatim because the input did not parse as a tree
    PlainText(String),
}

impl ContentSource {
    /// Interpret a stored content string.
    ///
    /// Tries the serialized tree form first; on failure falls back to
    /// treating the raw input as plain text. The parse failure is logged,
    /// not surfaced: malformed content is recoverable by design.
    pub fn from_serialized(input: &str) -> Self {
        match parser::parse_document(input) {
            Ok(document) => ContentSource::Document(document),
            Err(e) => {
                log::warn!("content did not parse as a document tree ({e}); treating as plain text");
                ContentSource::PlainText(input.to_string())
            }
        }
    }

    /// The text the derived-field calculator operates on.
    ///
    /// For a tree this is every text run in reading order joined with one
    /// space; for plain text it is the raw string unchanged.
    pub fn joined_text(&self) -> String {
        match self {
            ContentSource::Document(document) => document.joined_text(),
            ContentSource::PlainText(text) => text.clone(),
        }
    }

    /// Whether this snapshot came through the plain-text fallback.
    pub fn is_plain_text(&self) -> bool {
        matches!(self, ContentSource::PlainText(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serialized_parses_tree() {
        let input = r#"{"root": {"children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "hi", "format": 0}]}
        ]}}"#;
        let source = ContentSource::from_serialized(input);
        assert!(!source.is_plain_text());
        assert_eq!(source.joined_text(), "hi");
    }

    #[test]
    fn test_from_serialized_falls_back_to_plain_text() {
        let source = ContentSource::from_serialized("not a tree at all");
        assert!(source.is_plain_text());
        assert_eq!(source.joined_text(), "not a tree at all");
    }

    #[test]
    fn test_json_without_root_falls_back() {
        let source = ContentSource::from_serialized(r#"{"some": "object"}"#);
        assert!(source.is_plain_text());
    }
}
