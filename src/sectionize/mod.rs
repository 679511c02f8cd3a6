//! Content sectionizer.
//!
//! Restructures a flat rich-text write-up into an ordered tree of
//! {intro content, named sections, named subsections} while normalizing
//! element styling to the site's semantic class taxonomy.
//!
//! The walk runs over the top-level nodes of the parsed fragment in
//! document order: an `h2` opens a new section, an `h3` inside an open
//! section opens a subsection (one level only), and everything else is
//! serialized into whichever block is currently open. Content before the
//! first `h2` lands in `intro_content`.

use crate::dom::parse::parse_fragment;
use crate::dom::render::render_node;
use crate::dom::{Element, Node};

/// Class applied to figure wrappers around captioned images.
const CLASS_FIGURE: &str = "image-figure";
/// Class applied to image captions derived from alt text.
const CLASS_FIGCAPTION: &str = "image-caption";
/// Marker class for carousel containers; their images are captioned by the
/// carousel transform instead, so the sectionizer must not double-caption.
const CLASS_CAROUSEL: &str = "carousel";

/// Tag → semantic class mapping applied to every parsed element.
///
/// The mapping REPLACES the element's class attribute.
fn semantic_class(tag: &str) -> Option<&'static str> {
    match tag {
        "h1" => Some("heading-xl"),
        "h2" => Some("heading-lg"),
        "h3" | "h4" => Some("heading-md"),
        "p" => Some("paragraph"),
        "a" => Some("text-link"),
        "img" => Some("project-image"),
        "strong" => Some("text-emphasis"),
        "em" => Some("text-italic"),
        _ => None,
    }
}

/// One logical block of content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Heading text (empty for the intro block).
    pub title: String,
    /// Serialized markup fragments belonging directly to this section.
    pub content: Vec<String>,
    /// Nested sections, one level of nesting only.
    pub subsections: Vec<Section>,
}

impl Section {
    fn titled(title: String) -> Self {
        Self {
            title,
            content: Vec::new(),
            subsections: Vec::new(),
        }
    }
}

/// Sectionizer output: intro fragments plus named sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionedContent {
    pub intro_content: Vec<String>,
    pub sections: Vec<Section>,
}

/// Restructure a markup fragment into sections.
///
/// Empty input yields empty output; malformed markup is handled by the
/// parser's best-effort recovery. Never fails.
pub fn sectionize(html: &str) -> SectionedContent {
    let mut nodes = parse_fragment(html);
    normalize_classes(&mut nodes);
    wrap_image_captions(&mut nodes, false);
    split_into_sections(&nodes)
}

/// Sectionize a fragment that has already been parsed and transformed.
///
/// Used by the project detail page, which rewrites image sources and
/// expands carousels on the tree before splitting it.
pub fn sectionize_nodes(mut nodes: Vec<Node>) -> SectionedContent {
    normalize_classes(&mut nodes);
    wrap_image_captions(&mut nodes, false);
    split_into_sections(&nodes)
}

// =============================================================================
// Class normalization
// =============================================================================

/// Rewrite presentation classes to the semantic taxonomy, recursively.
fn normalize_classes(nodes: &mut [Node]) {
    for node in nodes {
        if let Node::Element(el) = node {
            if let Some(class) = semantic_class(&el.tag) {
                el.set_class(class);
            }
            normalize_classes(&mut el.children);
        }
    }
}

// =============================================================================
// Caption wrapping
// =============================================================================

/// Wrap images carrying non-empty alt text in a captioned figure.
///
/// Images inside a carousel container are skipped: the carousel transform
/// derives slide captions from the same alt text.
fn wrap_image_captions(nodes: &mut [Node], in_carousel: bool) {
    for node in nodes {
        let Node::Element(el) = node else { continue };

        let inside = in_carousel || el.has_class(CLASS_CAROUSEL);

        if !inside
            && el.is_tag("img")
            && let Some(alt) = el.get_attr("alt")
            && !alt.trim().is_empty()
        {
            let caption = alt.trim().to_string();
            let img = std::mem::take(&mut **el);
            let figure = Element::new("figure")
                .with_attr("class", CLASS_FIGURE)
                .with_child(Node::Element(Box::new(img)))
                .with_child(Node::Element(Box::new(
                    Element::new("figcaption")
                        .with_attr("class", CLASS_FIGCAPTION)
                        .with_text(&caption),
                )));
            **el = figure;
            continue;
        }

        wrap_image_captions(&mut el.children, inside);
    }
}

// =============================================================================
// Section walk
// =============================================================================

/// Walk top-level nodes and split them into intro/sections/subsections.
fn split_into_sections(nodes: &[Node]) -> SectionedContent {
    let mut intro_content = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut current_sub: Option<Section> = None;

    for node in nodes {
        // Only element nodes participate in the walk; stray top-level text
        // carries no styling hooks and is dropped, matching the renderer's
        // behavior for write-ups.
        let Some(el) = node.as_element() else { continue };

        if el.is_tag("h2") {
            if let Some(mut section) = current.take() {
                if let Some(sub) = current_sub.take() {
                    section.subsections.push(sub);
                }
                sections.push(section);
            }
            current = Some(Section::titled(el.text_content().trim().to_string()));
        } else if el.is_tag("h3")
            && let Some(section) = current.as_mut()
        {
            if let Some(sub) = current_sub.take() {
                section.subsections.push(sub);
            }
            current_sub = Some(Section::titled(el.text_content().trim().to_string()));
        } else {
            let fragment = render_node(node);
            if let Some(sub) = current_sub.as_mut() {
                sub.content.push(fragment);
            } else if let Some(section) = current.as_mut() {
                section.content.push(fragment);
            } else {
                intro_content.push(fragment);
            }
        }
    }

    if let Some(mut section) = current {
        if let Some(sub) = current_sub.take() {
            section.subsections.push(sub);
        }
        sections.push(section);
    }

    SectionedContent {
        intro_content,
        sections,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = sectionize("");
        assert!(result.intro_content.is_empty());
        assert!(result.sections.is_empty());
    }

    #[test]
    fn test_intro_only() {
        let result = sectionize("<p>one</p><p>two</p><ul><li>three</li></ul>");
        assert_eq!(result.intro_content.len(), 3);
        assert!(result.sections.is_empty());
    }

    #[test]
    fn test_sections_in_document_order() {
        let result = sectionize("<h2>Alpha</h2><h2>Beta</h2><h2>Gamma</h2>");
        let titles: Vec<_> = result.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
        // Consecutive headings: empty content is allowed, not an error
        assert!(result.sections.iter().all(|s| s.content.is_empty()));
    }

    #[test]
    fn test_intro_then_two_sections() {
        let result = sectionize(
            r#"<p>Intro</p><h2>Setup</h2><img src="a.png" alt="A"><h2>Results</h2><p>Done</p>"#,
        );

        assert_eq!(
            result.intro_content,
            vec![r#"<p class="paragraph">Intro</p>"#]
        );
        assert_eq!(result.sections.len(), 2);

        assert_eq!(result.sections[0].title, "Setup");
        assert_eq!(result.sections[0].content.len(), 1);
        // Image with alt text gets the normalized class and a caption wrapper
        let img_fragment = &result.sections[0].content[0];
        assert!(img_fragment.contains(r#"<img src="a.png" alt="A" class="project-image">"#));
        assert!(img_fragment.contains(r#"<figcaption class="image-caption">A</figcaption>"#));

        assert_eq!(result.sections[1].title, "Results");
        assert_eq!(
            result.sections[1].content,
            vec![r#"<p class="paragraph">Done</p>"#]
        );
    }

    #[test]
    fn test_class_normalization_replaces_existing() {
        let result = sectionize(r#"<p class="fancy">x</p><h1 class="big">T</h1>"#);
        assert_eq!(result.intro_content.len(), 2);
        assert!(result.intro_content[0].contains(r#"class="paragraph""#));
        assert!(!result.intro_content[0].contains("fancy"));
        assert!(result.intro_content[1].contains(r#"class="heading-xl""#));
    }

    #[test]
    fn test_nested_elements_normalized() {
        let result = sectionize(r#"<p>see <a href="/x">this</a> and <strong>that</strong> <em>now</em></p>"#);
        let p = &result.intro_content[0];
        assert!(p.contains(r#"<a href="/x" class="text-link">"#));
        assert!(p.contains(r#"<strong class="text-emphasis">"#));
        assert!(p.contains(r#"<em class="text-italic">"#));
    }

    #[test]
    fn test_heading_title_strips_markup() {
        let result = sectionize("<h2>Deep <em>Learning</em> Models</h2>");
        assert_eq!(result.sections[0].title, "Deep Learning Models");
    }

    #[test]
    fn test_subsections_nest_one_level() {
        let result = sectionize(
            "<h2>Methods</h2><p>overview</p><h3>Clustering</h3><p>kmeans</p><h3>Trees</h3><p>cart</p><h2>Results</h2>",
        );

        assert_eq!(result.sections.len(), 2);
        let methods = &result.sections[0];
        assert_eq!(methods.title, "Methods");
        assert_eq!(methods.content.len(), 1);
        assert_eq!(methods.subsections.len(), 2);
        assert_eq!(methods.subsections[0].title, "Clustering");
        assert_eq!(methods.subsections[0].content.len(), 1);
        assert_eq!(methods.subsections[1].title, "Trees");
        assert!(result.sections[1].subsections.is_empty());
    }

    #[test]
    fn test_h3_before_any_section_is_intro_content() {
        let result = sectionize("<h3>Orphan</h3><p>text</p>");
        assert!(result.sections.is_empty());
        assert_eq!(result.intro_content.len(), 2);
        assert!(result.intro_content[0].contains("heading-md"));
    }

    #[test]
    fn test_image_without_alt_not_wrapped() {
        let result = sectionize(r#"<img src="a.png">"#);
        assert_eq!(
            result.intro_content,
            vec![r#"<img src="a.png" class="project-image">"#]
        );
    }

    #[test]
    fn test_image_blank_alt_not_wrapped() {
        let result = sectionize(r#"<img src="a.png" alt="  ">"#);
        assert!(!result.intro_content[0].contains("figure"));
    }

    #[test]
    fn test_carousel_images_not_captioned() {
        let result = sectionize(
            r#"<div class="carousel"><img src="a.png" alt="A"><img src="b.png" alt="B"></div>"#,
        );
        let fragment = &result.intro_content[0];
        // Carousel slides are captioned by the carousel transform instead
        assert!(!fragment.contains("figcaption"));
        assert!(fragment.contains(r#"class="project-image""#));
    }

    #[test]
    fn test_malformed_markup_recovers() {
        // Best-effort parsing: never an error, whatever the parser
        // salvages still flows through the walk
        let result = sectionize("<p>unclosed<h2>Next</h2><p>ok</p>");
        let fragments = result.intro_content.len()
            + result
                .sections
                .iter()
                .map(|s| s.content.len() + 1)
                .sum::<usize>();
        assert!(fragments > 0);
    }
}
