//! Draft parsing error types

use thiserror::Error;

/// Errors from parsing a serialized draft into a document tree.
///
/// These are recovery signals, not surfaced failures: callers fall back to
/// treating the raw input as plain text (see `ContentSource::from_serialized`).
#[derive(Error, Debug)]
pub enum DraftParseError {
    /// The input is not syntactically valid JSON
    #[error("draft is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input is JSON but has no root node object
    #[error("draft JSON has no root node")]
    MissingRoot,
}
