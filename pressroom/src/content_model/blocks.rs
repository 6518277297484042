//! Block-level document elements
//!
//! This module defines the structured representation of editable rich
//! content at the block level (paragraphs, headings, quotes, lists).

use super::inline::Inline;
use itertools::Itertools;

/// A rich content document: an ordered sequence of block nodes.
///
/// Child order is reading order everywhere in the tree. A document with no
/// blocks is considered empty and is rejected by the publish gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks in reading order
    pub root: Vec<Block>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document has no block content at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// All text content in reading order, fragments joined with one space.
    ///
    /// This is the text the derived-field calculator operates on: every text
    /// run in the tree contributes one fragment, regardless of which block
    /// kind contains it.
    pub fn joined_text(&self) -> String {
        let mut fragments: Vec<&str> = Vec::new();
        for block in &self.root {
            block.collect_text(&mut fragments);
        }
        fragments.iter().join(" ")
    }
}

/// Block-level document element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph of inline content
    Paragraph {
        /// Inline children in reading order
        children: Vec<Inline>,
    },

    /// A heading with level and inline content
    Heading {
        /// Heading level (1 = h1, 2 = h2, ...). Stored as parsed; values
        /// outside 1..=6 render as level 1.
        level: u8,
        /// Inline children in reading order
        children: Vec<Inline>,
    },

    /// A block quote of inline content
    Quote {
        /// Inline children in reading order
        children: Vec<Inline>,
    },

    /// An ordered or unordered list
    List {
        /// Numbered list when true, bulleted when false
        ordered: bool,
        /// List items in reading order
        items: Vec<ListItem>,
    },

    /// A block node of a kind this model does not understand
    ///
    /// Produced by the draft parser for unrecognized node tags. Renders as
    /// the concatenation of its children with no block decoration.
    Unknown {
        /// Inline content recovered from the unrecognized node
        children: Vec<Inline>,
    },
}

impl Block {
    /// Collect text fragments from this block in reading order.
    pub(crate) fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Block::Paragraph { children }
            | Block::Heading { children, .. }
            | Block::Quote { children }
            | Block::Unknown { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Block::List { items, .. } => {
                for item in items {
                    for child in &item.children {
                        child.collect_text(out);
                    }
                }
            }
        }
    }
}

/// A single list item holding inline content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Inline children in reading order
    pub children: Vec<Inline>,
}

impl ListItem {
    /// Create a list item from inline children.
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }
}
