//! Tolerant parsing of the serialized draft form
//!
//! Drafts are persisted as the editor's serialized state: JSON with a `root`
//! object whose `children` array holds block nodes. Every node carries a
//! `type` string tag; text nodes carry `text` and an integer `format`
//! bitmask; heading nodes carry `tag` ("h1".."h6"); list nodes carry
//! `listType` ("number" or "bullet") and `listitem` children.
//!
//! Parsing is deliberately lenient: unrecognized node tags fold into
//! `Unknown` variants instead of failing, so a draft written by a newer
//! editor still renders its text. Only two conditions are errors, and both
//! trigger the plain-text fallback upstream: input that is not JSON, and
//! JSON with no `root` object.

use super::blocks::{Block, Document, ListItem};
use super::error::DraftParseError;
use super::inline::{FormatFlags, Inline};
use serde_json::{json, Value};

/// Parse a serialized draft into a document tree.
///
/// # Parameters
/// * `input` - The serialized draft as stored (JSON string)
///
/// # Returns
/// * `Ok(Document)` - Parsed tree, possibly containing `Unknown` nodes
/// * `Err(DraftParseError)` - Input was not JSON or had no root object
pub fn parse_document(input: &str) -> Result<Document, DraftParseError> {
    let value: Value = serde_json::from_str(input)?;
    let root = value
        .get("root")
        .and_then(Value::as_object)
        .ok_or(DraftParseError::MissingRoot)?;

    let blocks = match root.get("children").and_then(Value::as_array) {
        Some(nodes) => nodes.iter().map(parse_block).collect(),
        None => Vec::new(),
    };

    Ok(Document { root: blocks })
}

/// Serialize a document tree back to the stored draft form.
///
/// The output is deterministic for a given tree, so serialize-parse-serialize
/// is stable. `Unknown` nodes write the tag `"unknown"`; their original tag
/// is not retained.
pub fn to_serialized(document: &Document) -> String {
    let children: Vec<Value> = document.root.iter().map(block_to_value).collect();
    json!({
        "root": {
            "type": "root",
            "children": children,
        }
    })
    .to_string()
}

fn parse_block(node: &Value) -> Block {
    let node_type = node.get("type").and_then(Value::as_str).unwrap_or("");
    match node_type {
        "paragraph" => Block::Paragraph {
            children: parse_inline_children(node),
        },
        "heading" => Block::Heading {
            level: parse_heading_level(node),
            children: parse_inline_children(node),
        },
        "quote" => Block::Quote {
            children: parse_inline_children(node),
        },
        "list" => Block::List {
            ordered: node.get("listType").and_then(Value::as_str) == Some("number"),
            items: parse_list_items(node),
        },
        other => {
            log::warn!("unrecognized block node type '{other}', keeping its text only");
            Block::Unknown {
                children: parse_inline_children(node),
            }
        }
    }
}

/// Heading level from the node's `tag` field ("h2" -> 2).
///
/// The stored value is preserved as parsed; clamping to the renderable range
/// happens at projection time.
fn parse_heading_level(node: &Value) -> u8 {
    node.get("tag")
        .and_then(Value::as_str)
        .and_then(|tag| tag.strip_prefix('h'))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(1)
}

fn parse_list_items(node: &Value) -> Vec<ListItem> {
    let Some(children) = node.get("children").and_then(Value::as_array) else {
        return Vec::new();
    };

    children
        .iter()
        .map(|child| {
            if child.get("type").and_then(Value::as_str) == Some("listitem") {
                ListItem::new(parse_inline_children(child))
            } else {
                // A non-listitem child still becomes an item so its text survives
                ListItem::new(parse_inline(child).into_iter().collect())
            }
        })
        .collect()
}

fn parse_inline_children(node: &Value) -> Vec<Inline> {
    let Some(children) = node.get("children").and_then(Value::as_array) else {
        return Vec::new();
    };

    children.iter().filter_map(parse_inline).collect()
}

fn parse_inline(node: &Value) -> Option<Inline> {
    match node {
        Value::String(text) => Some(Inline::text(text.clone())),
        Value::Object(_) => {
            let node_type = node.get("type").and_then(Value::as_str).unwrap_or("");
            if node_type == "text" {
                let content = node
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let bits = node.get("format").and_then(Value::as_u64).unwrap_or(0) as u8;
                Some(Inline::Text {
                    content,
                    format: FormatFlags::from_bits(bits),
                })
            } else {
                Some(Inline::Unknown {
                    children: parse_inline_children(node),
                })
            }
        }
        _ => {
            log::warn!("skipping non-node value in draft children");
            None
        }
    }
}

fn block_to_value(block: &Block) -> Value {
    match block {
        Block::Paragraph { children } => json!({
            "type": "paragraph",
            "children": inlines_to_values(children),
        }),
        Block::Heading { level, children } => json!({
            "type": "heading",
            "tag": format!("h{level}"),
            "children": inlines_to_values(children),
        }),
        Block::Quote { children } => json!({
            "type": "quote",
            "children": inlines_to_values(children),
        }),
        Block::List { ordered, items } => {
            let children: Vec<Value> = items
                .iter()
                .map(|item| {
                    json!({
                        "type": "listitem",
                        "children": inlines_to_values(&item.children),
                    })
                })
                .collect();
            json!({
                "type": "list",
                "listType": if *ordered { "number" } else { "bullet" },
                "children": children,
            })
        }
        Block::Unknown { children } => json!({
            "type": "unknown",
            "children": inlines_to_values(children),
        }),
    }
}

fn inlines_to_values(inlines: &[Inline]) -> Vec<Value> {
    inlines.iter().map(inline_to_value).collect()
}

fn inline_to_value(inline: &Inline) -> Value {
    match inline {
        Inline::Text { content, format } => json!({
            "type": "text",
            "text": content,
            "format": format.bits(),
        }),
        Inline::Unknown { children } => json!({
            "type": "unknown",
            "children": inlines_to_values(children),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DRAFT: &str = r#"{
        "root": {
            "type": "root",
            "children": [
                {"type": "heading", "tag": "h2", "children": [
                    {"type": "text", "text": "Title", "format": 0}
                ]},
                {"type": "paragraph", "children": [
                    {"type": "text", "text": "plain ", "format": 0},
                    {"type": "text", "text": "bold", "format": 1}
                ]},
                {"type": "list", "listType": "number", "children": [
                    {"type": "listitem", "children": [{"type": "text", "text": "first", "format": 0}]},
                    {"type": "listitem", "children": [{"type": "text", "text": "second", "format": 0}]}
                ]}
            ]
        }
    }"#;

    #[test]
    fn test_parse_sample_draft() {
        let doc = parse_document(SAMPLE_DRAFT).unwrap();
        assert_eq!(doc.root.len(), 3);

        match &doc.root[0] {
            Block::Heading { level, children } => {
                assert_eq!(*level, 2);
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected heading, got {other:?}"),
        }

        match &doc.root[1] {
            Block::Paragraph { children } => {
                assert_eq!(
                    children[1],
                    Inline::formatted("bold", FormatFlags::BOLD)
                );
            }
            other => panic!("expected paragraph, got {other:?}"),
        }

        match &doc.root[2] {
            Block::List { ordered, items } => {
                assert!(*ordered);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_block_keeps_text() {
        let input = r#"{"root": {"children": [
            {"type": "callout", "children": [{"type": "text", "text": "note", "format": 0}]}
        ]}}"#;
        let doc = parse_document(input).unwrap();
        match &doc.root[0] {
            Block::Unknown { children } => {
                assert_eq!(children[0], Inline::text("note"));
            }
            other => panic!("expected unknown block, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_inline_keeps_nested_text() {
        let input = r#"{"root": {"children": [
            {"type": "paragraph", "children": [
                {"type": "link", "url": "https://example.com", "children": [
                    {"type": "text", "text": "click", "format": 0}
                ]}
            ]}
        ]}}"#;
        let doc = parse_document(input).unwrap();
        assert_eq!(doc.joined_text(), "click");
    }

    #[test]
    fn test_not_json_is_an_error() {
        assert!(matches!(
            parse_document("just some plain words"),
            Err(DraftParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_json_without_root_is_an_error() {
        assert!(matches!(
            parse_document(r#"{"title": "no tree here"}"#),
            Err(DraftParseError::MissingRoot)
        ));
    }

    #[test]
    fn test_root_without_children_is_empty() {
        let doc = parse_document(r#"{"root": {"type": "root"}}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_heading_tag_out_of_range_is_preserved() {
        let input = r#"{"root": {"children": [
            {"type": "heading", "tag": "h9", "children": []}
        ]}}"#;
        let doc = parse_document(input).unwrap();
        assert!(matches!(doc.root[0], Block::Heading { level: 9, .. }));
    }

    #[test]
    fn test_serialize_parse_is_stable() {
        let doc = parse_document(SAMPLE_DRAFT).unwrap();
        let first = to_serialized(&doc);
        let reparsed = parse_document(&first).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(to_serialized(&reparsed), first);
    }

    #[test]
    fn test_unknown_nodes_survive_roundtrip() {
        let input = r#"{"root": {"children": [
            {"type": "callout", "children": [{"type": "text", "text": "note", "format": 0}]}
        ]}}"#;
        let doc = parse_document(input).unwrap();
        let reparsed = parse_document(&to_serialized(&doc)).unwrap();
        assert_eq!(reparsed, doc);
    }
}
