//! Draft-to-record pipeline
//!
//! This module orchestrates the three stages of turning an editing-session
//! snapshot into a storable record:
//! 1. **Interpret**: parse the serialized content into a tree, falling back
//!    to plain text when it does not parse
//! 2. **Derive**: recompute slug, word count, reading time, and excerpt
//! 3. **Assemble**: build the draft or published record
//!
//! Validation and projection run on the same snapshot as the derived
//! fields, so the stored excerpt and reading time always agree with the
//! published Markdown.

use crate::content_model::{validate_for_publish, ContentSource, ValidationError};
use crate::derived_fields::DerivedFields;
use crate::markdown_exporter;
use crate::post_record::{PostDraft, PostRecord};
use crate::site_config::SiteConfig;
use crate::slug::slugify;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Assemble a draft record.
///
/// The content is stored verbatim, exactly as the editor serialized it;
/// derived fields are recomputed from it. Saving a draft never fails: the
/// publish gate only applies to [`publish`].
pub fn save_draft(draft: &PostDraft) -> PostRecord {
    let source = ContentSource::from_serialized(&draft.content);
    let derived = DerivedFields::compute(&source);
    assemble_record(draft, &derived, draft.content.clone(), None)
}

/// Assemble a published record.
///
/// Runs the publish gate, then projects the content to Markdown with the
/// session's attached images and stamps the supplied publish timestamp.
///
/// # Parameters
/// * `draft` - The editing-session snapshot
/// * `published_at` - Publish timestamp supplied by the caller
///
/// # Returns
/// * `Ok(PostRecord)` - Record with Markdown content and timestamp set
/// * `Err(ValidationError)` - The post did not pass the publish gate
pub fn publish(draft: &PostDraft, published_at: &str) -> Result<PostRecord, ValidationError> {
    let source = ContentSource::from_serialized(&draft.content);
    validate_for_publish(&draft.title, &source)?;

    let derived = DerivedFields::compute(&source);
    let content = markdown_exporter::to_markdown(&source, &draft.images);

    Ok(assemble_record(
        draft,
        &derived,
        content,
        Some(published_at.to_string()),
    ))
}

fn assemble_record(
    draft: &PostDraft,
    derived: &DerivedFields,
    content: String,
    published_at: Option<String>,
) -> PostRecord {
    let slug = slugify(&draft.title);
    let id = draft.id.clone().unwrap_or_else(|| slug.clone());

    let description = match &draft.description {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => derived.excerpt.clone(),
    };

    PostRecord {
        id,
        title: draft.title.clone(),
        slug,
        description,
        content,
        image_url: draft.image_url.clone(),
        date: draft.date.clone(),
        tags: draft.tags.clone(),
        meta_title: draft.meta_title.clone(),
        meta_description: draft.meta_description.clone(),
        word_count: derived.word_count,
        reading_time_minutes: derived.reading_time_minutes,
        published_at,
    }
}

/// Errors from the file-based batch pipeline
#[derive(Error, Debug)]
pub enum BuildError {
    /// A draft file could not be read
    #[error("failed to read draft {path}: {source}", path = .path.display())]
    IoError {
        /// Path of the draft file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A draft file is not valid record JSON
    #[error("draft {path} is not a valid draft file: {source}", path = .path.display())]
    InvalidDraft {
        /// Path of the draft file
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A draft has no date field to use as the publish timestamp
    #[error("draft {path} has no date to publish with", path = .path.display())]
    MissingDate {
        /// Path of the draft file
        path: PathBuf,
    },

    /// A draft did not pass the publish gate
    #[error("draft {path} failed validation: {source}", path = .path.display())]
    ValidationFailed {
        /// Path of the draft file
        path: PathBuf,
        /// The validation failure
        #[source]
        source: ValidationError,
    },
}

/// Discover draft files under a content root.
///
/// Drafts are `.json` files; order is deterministic (directory entries are
/// visited sorted by file name).
pub fn discover_drafts(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.path().is_file()
                && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// Load one draft file.
pub fn load_draft(path: &Path) -> Result<PostDraft, BuildError> {
    let content = std::fs::read_to_string(path).map_err(|source| BuildError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut draft: PostDraft =
        serde_json::from_str(&content).map_err(|source| BuildError::InvalidDraft {
            path: path.to_path_buf(),
            source,
        })?;

    // The file stem identifies drafts that do not carry their own id
    if draft.id.is_none() {
        draft.id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.to_string());
    }

    Ok(draft)
}

/// Publish a single draft file.
///
/// Applies site defaults (tags, media base URL) before running the publish
/// pipeline. The draft's `date` field doubles as the publish timestamp.
pub fn publish_file(path: &Path, config: &SiteConfig) -> Result<PostRecord, BuildError> {
    let mut draft = load_draft(path)?;
    apply_site_defaults(&mut draft, config);

    let date = draft.date.clone().ok_or_else(|| BuildError::MissingDate {
        path: path.to_path_buf(),
    })?;

    publish(&draft, &date).map_err(|source| BuildError::ValidationFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Publish every draft under a content root.
///
/// # Parameters
/// * `root` - Content root containing draft files (and pressroom.toml)
/// * `config` - Site configuration already loaded from the root
///
/// # Returns
/// * `Ok(Vec<PostRecord>)` - One published record per draft, in path order
/// * `Err(BuildError)` - First draft that failed to load or publish
pub fn publish_directory(root: &Path, config: &SiteConfig) -> Result<Vec<PostRecord>, BuildError> {
    let paths = discover_drafts(root);
    log::info!("discovered {} draft files under {}", paths.len(), root.display());

    #[cfg(feature = "parallel")]
    let records: Result<Vec<_>, _> = paths
        .par_iter()
        .map(|path| publish_file(path, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let records: Result<Vec<_>, _> = paths
        .iter()
        .map(|path| publish_file(path, config))
        .collect();

    records
}

fn apply_site_defaults(draft: &mut PostDraft, config: &SiteConfig) {
    if draft.tags.is_empty() {
        draft.tags = config.default_tags.clone();
    }

    if let Some(url) = &draft.image_url {
        draft.image_url = Some(config.resolve_media_url(url));
    }

    for image in &mut draft.images {
        image.url = config.resolve_media_url(&image.url);
    }
}
