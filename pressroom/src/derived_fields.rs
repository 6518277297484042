//! Derived fields computed from a content snapshot
//!
//! Word count, reading time, and the auto-excerpt are recomputed from the
//! content on every save; they are never authoritative in storage. The same
//! rules apply to both the document tree and the plain-text fallback.

use crate::content_model::ContentSource;

/// Assumed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length in characters, before the truncation marker.
pub const EXCERPT_CHARS: usize = 200;

/// Marker appended to a truncated excerpt.
const ELLIPSIS: &str = "...";

/// Fields derived from a content snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    /// Number of whitespace-delimited tokens in the content text
    pub word_count: usize,
    /// Estimated reading time, never reported as zero
    pub reading_time_minutes: u32,
    /// Leading text of the content, truncated with a marker when long
    pub excerpt: String,
}

impl DerivedFields {
    /// Compute derived fields from a content snapshot.
    ///
    /// Deterministic and side-effect free. An empty document yields
    /// `word_count = 0`, `reading_time_minutes = 1`, and an empty excerpt.
    pub fn compute(source: &ContentSource) -> Self {
        Self::from_text(&source.joined_text())
    }

    /// Compute derived fields directly from text.
    ///
    /// This is the whole calculation; [`compute`](Self::compute) only
    /// extracts the text first. It is public because the plain-text
    /// fallback path applies these exact rules to raw content.
    pub fn from_text(text: &str) -> Self {
        let word_count = text.split_whitespace().count();

        // At least one minute, so the UI never shows a "0 min read"
        let reading_time_minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u32;

        let excerpt = if text.chars().count() > EXCERPT_CHARS {
            let truncated: String = text.chars().take(EXCERPT_CHARS).collect();
            truncated + ELLIPSIS
        } else {
            text.to_string()
        };

        Self {
            word_count,
            reading_time_minutes,
            excerpt,
        }
    }
}
