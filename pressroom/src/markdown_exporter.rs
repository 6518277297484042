//! Markdown projection for publishable content
//!
//! Renders a content snapshot to the flat Markdown string stored for a
//! published post. Rendering is pure and deterministic: the same snapshot
//! and image list always produce byte-identical output, which keeps
//! draft/publish diffing honest.
//!
//! Media is a side channel. The tree format has no embedded media nodes;
//! images inserted during an editing session are tracked separately by the
//! editor surface and handed in here as an ordered list of references, which
//! are appended after the body in insertion order.

use crate::content_model::{Block, ContentSource, FormatFlags, Inline, ListItem};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A media attachment gathered out-of-band during an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Alternative text for the image
    #[serde(default)]
    pub alt_text: String,
    /// Public URL of the uploaded image
    pub url: String,
}

/// Render a content snapshot plus attached images to Markdown.
///
/// # Parameters
/// * `source` - The content snapshot being published
/// * `images` - Media attachments in insertion order
///
/// # Returns
/// * Markdown string with leading/trailing whitespace trimmed
pub fn to_markdown(source: &ContentSource, images: &[ImageRef]) -> String {
    let mut output = String::new();

    match source {
        ContentSource::Document(document) => {
            for block in &document.root {
                write_block(&mut output, block);
            }
        }
        ContentSource::PlainText(text) => {
            output.push_str(text);
            output.push_str("\n\n");
        }
    }

    for image in images {
        output.push_str(&format!("![{}]({})\n\n", image.alt_text, image.url));
    }

    output.trim().to_string()
}

/// Write a single block followed by a blank line
fn write_block(output: &mut String, block: &Block) {
    match block {
        Block::Paragraph { children } => {
            output.push_str(&inlines_to_markdown(children));
            output.push_str("\n\n");
        }

        Block::Heading { level, children } => {
            let level = usize::from(heading_level(*level));
            output.push_str(&format!(
                "{} {}\n\n",
                "#".repeat(level),
                inlines_to_markdown(children)
            ));
        }

        Block::Quote { children } => {
            output.push_str(&format!("> {}\n\n", inlines_to_markdown(children)));
        }

        Block::List { ordered, items } => {
            write_list(output, *ordered, items);
        }

        // Unrecognized blocks degrade to their text, with no decoration
        Block::Unknown { children } => {
            let rendered = inlines_to_markdown(children);
            if !rendered.is_empty() {
                output.push_str(&rendered);
                output.push_str("\n\n");
            }
        }
    }
}

/// Renderable heading level; anything outside h1..h6 renders as h1.
fn heading_level(level: u8) -> u8 {
    if (1..=6).contains(&level) {
        level
    } else {
        1
    }
}

fn write_list(output: &mut String, ordered: bool, items: &[ListItem]) {
    let body = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = if ordered {
                format!("{}. ", index + 1)
            } else {
                "- ".to_string()
            };
            format!("{marker}{}", inlines_to_markdown(&item.children))
        })
        .join("\n");

    output.push_str(&body);
    output.push_str("\n\n");
}

/// Convert inline content to a markdown string with formatting applied
fn inlines_to_markdown(inlines: &[Inline]) -> String {
    let mut result = String::new();

    for inline in inlines {
        match inline {
            Inline::Text { content, format } => {
                result.push_str(&wrap_text(content, *format));
            }
            // Unrecognized inline nodes degrade to their children
            Inline::Unknown { children } => {
                result.push_str(&inlines_to_markdown(children));
            }
        }
    }

    result
}

/// Apply format wraps in a fixed order: code, bold, italic, underline.
///
/// The order is the contract; it makes multi-flag runs deterministic
/// (bold+italic is always `***text***`, with underline outermost when set).
fn wrap_text(content: &str, format: FormatFlags) -> String {
    let mut text = content.to_string();

    if format.contains(FormatFlags::CODE) {
        text = format!("`{text}`");
    }
    if format.contains(FormatFlags::BOLD) {
        text = format!("**{text}**");
    }
    if format.contains(FormatFlags::ITALIC) {
        text = format!("*{text}*");
    }
    if format.contains(FormatFlags::UNDERLINE) {
        text = format!("<u>{text}</u>");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_model::Document;

    fn doc(root: Vec<Block>) -> ContentSource {
        ContentSource::Document(Document { root })
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            children: vec![Inline::text(text)],
        }
    }

    #[test]
    fn test_heading_then_paragraph() {
        let source = doc(vec![
            Block::Heading {
                level: 2,
                children: vec![Inline::text("Title")],
            },
            paragraph("Body"),
        ]);
        assert_eq!(to_markdown(&source, &[]), "## Title\n\nBody");
    }

    #[test]
    fn test_bold_italic_nesting_is_fixed() {
        let source = doc(vec![Block::Paragraph {
            children: vec![Inline::formatted(
                "hi",
                FormatFlags::BOLD | FormatFlags::ITALIC,
            )],
        }]);
        assert_eq!(to_markdown(&source, &[]), "***hi***");
    }

    #[test]
    fn test_all_flags_nest_with_underline_outermost() {
        let source = doc(vec![Block::Paragraph {
            children: vec![Inline::formatted(
                "hi",
                FormatFlags::BOLD | FormatFlags::ITALIC | FormatFlags::CODE | FormatFlags::UNDERLINE,
            )],
        }]);
        assert_eq!(to_markdown(&source, &[]), "<u>***`hi`***</u>");
    }

    #[test]
    fn test_quote() {
        let source = doc(vec![Block::Quote {
            children: vec![Inline::text("wise words")],
        }]);
        assert_eq!(to_markdown(&source, &[]), "> wise words");
    }

    #[test]
    fn test_unordered_list() {
        let source = doc(vec![Block::List {
            ordered: false,
            items: vec![
                ListItem::new(vec![Inline::text("first")]),
                ListItem::new(vec![Inline::text("second")]),
            ],
        }]);
        assert_eq!(to_markdown(&source, &[]), "- first\n- second");
    }

    #[test]
    fn test_ordered_list_numbers_from_one() {
        let source = doc(vec![Block::List {
            ordered: true,
            items: vec![
                ListItem::new(vec![Inline::text("first")]),
                ListItem::new(vec![Inline::text("second")]),
                ListItem::new(vec![Inline::text("third")]),
            ],
        }]);
        assert_eq!(to_markdown(&source, &[]), "1. first\n2. second\n3. third");
    }

    #[test]
    fn test_out_of_range_heading_renders_as_h1() {
        let source = doc(vec![Block::Heading {
            level: 9,
            children: vec![Inline::text("Deep")],
        }]);
        assert_eq!(to_markdown(&source, &[]), "# Deep");

        let source = doc(vec![Block::Heading {
            level: 0,
            children: vec![Inline::text("Zero")],
        }]);
        assert_eq!(to_markdown(&source, &[]), "# Zero");
    }

    #[test]
    fn test_unknown_block_renders_children_without_decoration() {
        let source = doc(vec![
            Block::Unknown {
                children: vec![Inline::text("mystery")],
            },
            paragraph("after"),
        ]);
        assert_eq!(to_markdown(&source, &[]), "mystery\n\nafter");
    }

    #[test]
    fn test_unknown_inline_renders_children() {
        let source = doc(vec![Block::Paragraph {
            children: vec![
                Inline::text("see "),
                Inline::Unknown {
                    children: vec![Inline::formatted("this", FormatFlags::BOLD)],
                },
            ],
        }]);
        assert_eq!(to_markdown(&source, &[]), "see **this**");
    }

    #[test]
    fn test_images_append_in_insertion_order() {
        let source = doc(vec![paragraph("Body")]);
        let images = vec![
            ImageRef {
                alt_text: "one".to_string(),
                url: "https://cdn.example.com/1.png".to_string(),
            },
            ImageRef {
                alt_text: "two".to_string(),
                url: "https://cdn.example.com/2.png".to_string(),
            },
        ];
        assert_eq!(
            to_markdown(&source, &images),
            "Body\n\n![one](https://cdn.example.com/1.png)\n\n![two](https://cdn.example.com/2.png)"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let source = ContentSource::PlainText("just some notes".to_string());
        assert_eq!(to_markdown(&source, &[]), "just some notes");
    }

    #[test]
    fn test_plain_text_with_images() {
        let source = ContentSource::PlainText("notes".to_string());
        let images = vec![ImageRef {
            alt_text: "shot".to_string(),
            url: "https://cdn.example.com/s.png".to_string(),
        }];
        assert_eq!(
            to_markdown(&source, &images),
            "notes\n\n![shot](https://cdn.example.com/s.png)"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let source = doc(vec![
            Block::Heading {
                level: 3,
                children: vec![Inline::formatted("Top", FormatFlags::BOLD)],
            },
            paragraph("Body text"),
            Block::List {
                ordered: true,
                items: vec![ListItem::new(vec![Inline::text("step")])],
            },
        ]);
        let images = vec![ImageRef {
            alt_text: "diagram".to_string(),
            url: "https://cdn.example.com/d.svg".to_string(),
        }];
        assert_eq!(to_markdown(&source, &images), to_markdown(&source, &images));
    }

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(to_markdown(&doc(vec![]), &[]), "");
    }
}
