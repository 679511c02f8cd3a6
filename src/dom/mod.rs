//! Owned document model for content transforms.
//!
//! Write-up HTML is parsed once into this detached tree, transformed
//! (class normalization, sectioning, carousel expansion), then serialized
//! back to HTML. The live output never gets patched in place; every
//! transform is a function of the parsed tree, so re-running a transform
//! over its own output is naturally safe.
//!
//! - [`parse`]: best-effort HTML parsing via `tl`
//! - [`render`]: serialization back to HTML

pub mod parse;
pub mod render;

use smallvec::SmallVec;

/// A single HTML node: element or text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(String),
}

impl Node {
    /// The contained element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Mutable access to the contained element, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

/// An HTML element: tag, attributes in document order, children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: SmallVec<[Node; 4]>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child appender.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style text child appender.
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    /// Check tag name (ASCII case-insensitive).
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Iterate the element's classes.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    /// Check for a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let updated = match self.get_attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", updated);
    }

    /// Replace the whole class attribute.
    pub fn set_class(&mut self, class: &str) {
        self.set_attr("class", class);
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Count descendant elements matching the tag.
    pub fn count_descendants(&self, tag: &str) -> usize {
        let mut count = 0;
        for child in &self.children {
            if let Node::Element(el) = child {
                if el.is_tag(tag) {
                    count += 1;
                }
                count += el.count_descendants(tag);
            }
        }
        count
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs() {
        let mut el = Element::new("img");
        assert_eq!(el.get_attr("src"), None);

        el.set_attr("src", "a.png");
        assert_eq!(el.get_attr("src"), Some("a.png"));

        el.set_attr("src", "b.png");
        assert_eq!(el.get_attr("src"), Some("b.png"));
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn test_classes() {
        let mut el = Element::new("div");
        assert!(!el.has_class("carousel"));

        el.add_class("carousel");
        el.add_class("wide");
        el.add_class("carousel"); // no duplicate
        assert_eq!(el.get_attr("class"), Some("carousel wide"));

        el.set_class("paragraph");
        assert_eq!(el.get_attr("class"), Some("paragraph"));
    }

    #[test]
    fn test_text_content() {
        let el = Element::new("h2")
            .with_text("Hello ")
            .with_child(Node::Element(Box::new(
                Element::new("em").with_text("world"),
            )));
        assert_eq!(el.text_content(), "Hello world");
    }

    #[test]
    fn test_count_descendants() {
        let el = Element::new("div")
            .with_child(Node::Element(Box::new(Element::new("img"))))
            .with_child(Node::Element(Box::new(
                Element::new("p").with_child(Node::Element(Box::new(Element::new("img")))),
            )));
        assert_eq!(el.count_descendants("img"), 2);
        assert_eq!(el.count_descendants("a"), 0);
    }
}
