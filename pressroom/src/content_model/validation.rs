//! Pre-publish validation gate

use super::ContentSource;
use thiserror::Error;

/// Minimum trimmed length for plain-text content to be publishable.
///
/// Only applies to the plain-text fallback path; tree content is gated on
/// having at least one block instead.
pub const MIN_PLAIN_TEXT_CHARS: usize = 10;

/// Validation failures surfaced to the caller as user-visible messages.
///
/// The pipeline never auto-corrects these; the editing surface is expected
/// to display them inline and block publishing until resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The post title is empty after trimming
    #[error("Please enter a title before publishing")]
    EmptyTitle,

    /// The content is empty (no blocks) or too short to publish
    #[error("Please add some content before publishing")]
    EmptyContent,
}

/// Check that a post is publishable.
///
/// # Parameters
/// * `title` - The post title as entered
/// * `content` - The content snapshot being published
///
/// # Returns
/// * `Ok(())` - The post passes the gate
/// * `Err(ValidationError)` - First failing check, for inline display
pub fn validate_for_publish(title: &str, content: &ContentSource) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let empty = match content {
        ContentSource::Document(document) => document.is_empty(),
        ContentSource::PlainText(text) => text.trim().chars().count() < MIN_PLAIN_TEXT_CHARS,
    };

    if empty {
        return Err(ValidationError::EmptyContent);
    }

    Ok(())
}
