//! Serialization of the document model back to HTML.

use super::{Element, Node};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

/// Serialize a single node to HTML.
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out, false);
    out
}

/// Serialize a node list to HTML.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out, false);
    }
    out
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
    match node {
        Node::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape(text));
            }
        }
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&el.tag) {
        // Void elements carry no children and no closing tag
        return;
    }

    let raw_text = is_raw_text_element(&el.tag);
    for child in &el.children {
        write_node(child, out, raw_text);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse::parse_fragment;

    #[test]
    fn test_render_paragraph() {
        let el = Element::new("p").with_attr("class", "paragraph").with_text("Intro");
        assert_eq!(
            render_node(&Node::Element(Box::new(el))),
            r#"<p class="paragraph">Intro</p>"#
        );
    }

    #[test]
    fn test_render_void_element() {
        let el = Element::new("img")
            .with_attr("src", "a.png")
            .with_attr("alt", "A");
        assert_eq!(
            render_node(&Node::Element(Box::new(el))),
            r#"<img src="a.png" alt="A">"#
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let el = Element::new("p").with_text("a < b & c");
        assert_eq!(
            render_node(&Node::Element(Box::new(el))),
            "<p>a &lt; b &amp; c</p>"
        );
    }

    #[test]
    fn test_render_escapes_attr() {
        let el = Element::new("a").with_attr("title", "say \"hi\"");
        assert_eq!(
            render_node(&Node::Element(Box::new(el))),
            r#"<a title="say &quot;hi&quot;"></a>"#
        );
    }

    #[test]
    fn test_render_nested() {
        let nodes = parse_fragment("<div><p>one</p><p>two</p></div>");
        assert_eq!(render_nodes(&nodes), "<div><p>one</p><p>two</p></div>");
    }

    #[test]
    fn test_parse_render_preserves_entities() {
        // &amp; decodes during parse and re-escapes during render, exactly once
        let nodes = parse_fragment("<p>a &amp; b</p>");
        assert_eq!(render_nodes(&nodes), "<p>a &amp; b</p>");
    }

    #[test]
    fn test_render_raw_text_element() {
        let el = Element::new("script").with_text("if (a < b) { go(); }");
        assert_eq!(
            render_node(&Node::Element(Box::new(el))),
            "<script>if (a < b) { go(); }</script>"
        );
    }
}
