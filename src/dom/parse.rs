//! HTML fragment parsing via `tl`.
//!
//! Best-effort recovery: malformed markup degrades to whatever `tl`
//! salvages, and input `tl` refuses to parse degrades to a single text
//! node. Parsing never fails.

use super::{Element, Node};
use crate::utils::html::unescape;

/// Parse an HTML fragment into owned nodes.
///
/// - Empty or whitespace-only input yields an empty list.
/// - Comments are dropped.
/// - Whitespace-only text nodes are dropped (they carry no content and
///   would otherwise pollute the top-level walk).
/// - Entities in text are decoded; the renderer re-escapes on output.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        return vec![Node::Text(html.to_string())];
    };

    let parser = dom.parser();
    let mut nodes = Vec::new();
    for handle in dom.children() {
        if let Some(node) = convert_node(*handle, parser) {
            nodes.push(node);
        }
    }
    nodes
}

/// Convert a tl node handle to an owned node.
fn convert_node(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            // Collect attributes in document order; names normalize to
            // lowercase like tag names do
            let mut element = Element::new(&tag_name);
            for (key, value) in tag.attributes().iter() {
                let key_str: &str = key.as_ref();
                let value_str = value.map(|v| v.to_string()).unwrap_or_default();
                element.set_attr(
                    &key_str.to_ascii_lowercase(),
                    unescape(&value_str).into_owned(),
                );
            }

            // Recursively process children
            for child_handle in tag.children().top().iter() {
                if let Some(child) = convert_node(*child_handle, parser) {
                    element.children.push(child);
                }
            }

            Some(Node::Element(Box::new(element)))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            if text.trim().is_empty() {
                None
            } else {
                Some(Node::Text(unescape(&text).into_owned()))
            }
        }
        tl::Node::Comment(_) => None,
    }
}
