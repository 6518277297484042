//! Inline content representation with format flags
//!
//! An inline node is a span of text carrying a format bitset. The editor
//! persists formatting as an integer bitmask, so the flags are modeled as an
//! explicit named bitset rather than loose booleans.

use std::ops::BitOr;

/// Character formatting bitset for a text run.
///
/// Bits are independent and combinable; a run with several bits set renders
/// with every corresponding wrap applied. Bit positions are a stable contract
/// with the stored draft format:
///
/// * bit 0: bold
/// * bit 1: italic
/// * bit 2: inline code
/// * bit 3: underline
///
/// Higher bits are preserved on round-trip but carry no rendering behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// No formatting
    pub const NONE: FormatFlags = FormatFlags(0);
    /// Bold formatting (bit 0)
    pub const BOLD: FormatFlags = FormatFlags(1);
    /// Italic formatting (bit 1)
    pub const ITALIC: FormatFlags = FormatFlags(1 << 1);
    /// Inline code formatting (bit 2)
    pub const CODE: FormatFlags = FormatFlags(1 << 2);
    /// Underline formatting (bit 3)
    pub const UNDERLINE: FormatFlags = FormatFlags(1 << 3);

    /// Build flags from the raw bitmask as stored in a draft.
    pub fn from_bits(bits: u8) -> Self {
        FormatFlags(bits)
    }

    /// Raw bitmask value, including any unrecognized high bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every bit of `other` is set in `self`.
    pub fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if any formatting bit is set.
    pub fn has_formatting(self) -> bool {
        self.0 != 0
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        FormatFlags(self.0 | rhs.0)
    }
}

/// Inline content within a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A span of text with consistent formatting
    Text {
        /// The text content
        content: String,
        /// Formatting applied to the whole span
        format: FormatFlags,
    },

    /// An inline node of a kind this model does not understand
    ///
    /// Produced by the draft parser for unrecognized node tags. Renders as
    /// the concatenation of its children with no wrapping.
    Unknown {
        /// Nested inline content recovered from the unrecognized node
        children: Vec<Inline>,
    },
}

impl Inline {
    /// Create a plain text run with no formatting.
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text {
            content: content.into(),
            format: FormatFlags::NONE,
        }
    }

    /// Create a text run with the given format flags.
    pub fn formatted(content: impl Into<String>, format: FormatFlags) -> Self {
        Inline::Text {
            content: content.into(),
            format,
        }
    }

    /// Collect text fragments from this node in reading order.
    pub(crate) fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Inline::Text { content, .. } => out.push(content),
            Inline::Unknown { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
