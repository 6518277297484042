//! pressroom - Content pipeline for a publishing console
//!
//! Turns rich-content drafts (the editor's serialized tree form) into
//! storable post records: drafts keep the tree verbatim, published posts
//! carry projected Markdown plus recomputed slug, word count, reading
//! time, and excerpt.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod content_model;
pub mod derived_fields;
pub mod markdown_exporter;
pub mod pipeline;
pub mod post_record;
pub mod site_config;
pub mod slug;
