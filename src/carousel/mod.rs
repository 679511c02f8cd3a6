//! Carousel transform.
//!
//! Scans a parsed content tree for containers flagged with the `carousel`
//! class and holding at least one image, and replaces each container's
//! children with the slideshow structure: a viewport-wrapped slide track,
//! previous/next controls, and (for multi-slide carousels) one position
//! indicator per slide.
//!
//! The transform is a pure function of the parsed tree, so rebuilding a
//! page re-derives the same structure instead of patching live markup.
//! Expanded containers are marked `carousel-initialized` and skipped on
//! later scans, which makes scanning idempotent even over markup that was
//! already transformed (e.g. a write-up that embeds pre-rendered output).

pub mod state;

pub use state::{ArrowKey, CarouselState, Input, SWIPE_THRESHOLD_PX};

use crate::dom::{Element, Node};

/// Marker class that flags a container as a carousel.
const CLASS_CAROUSEL: &str = "carousel";
/// Marker class recording that a container was already expanded.
const CLASS_INITIALIZED: &str = "carousel-initialized";

/// One slide of a parsed carousel: the image plus an optional caption
/// derived from its alt text.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: Element,
    pub caption: Option<String>,
}

/// Parsed carousel model: the slides in document order plus the
/// navigation state (slide 0 active).
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pub slides: Vec<Slide>,
    pub state: CarouselState,
}

impl Carousel {
    /// Extract a carousel model from a container's images.
    ///
    /// Returns `None` for containers without images (skipped, not an
    /// error).
    pub fn from_container(container: &Element) -> Option<Self> {
        let mut slides = Vec::new();
        collect_slides(container, &mut slides);
        if slides.is_empty() {
            return None;
        }
        let state = CarouselState::new(slides.len());
        Some(Self { slides, state })
    }
}

fn collect_slides(el: &Element, slides: &mut Vec<Slide>) {
    for child in &el.children {
        if let Node::Element(child_el) = child {
            if child_el.is_tag("img") {
                let caption = child_el
                    .get_attr("alt")
                    .map(str::trim)
                    .filter(|alt| !alt.is_empty())
                    .map(str::to_string);
                slides.push(Slide {
                    image: (**child_el).clone(),
                    caption,
                });
            } else {
                collect_slides(child_el, slides);
            }
        }
    }
}

// =============================================================================
// Tree expansion
// =============================================================================

/// Expand every not-yet-initialized carousel container in the tree.
///
/// Returns the number of containers expanded. Containers already marked
/// `carousel-initialized` and containers without images are left
/// untouched.
pub fn expand_carousels(nodes: &mut [Node]) -> usize {
    let mut expanded = 0;
    for node in nodes {
        let Node::Element(el) = node else { continue };

        if el.has_class(CLASS_CAROUSEL) && !el.has_class(CLASS_INITIALIZED) {
            if let Some(carousel) = Carousel::from_container(el) {
                build_structure(el, &carousel);
                expanded += 1;
            }
            // Zero-image containers are ignored; do not descend into an
            // expanded container, its children are freshly built
            continue;
        }

        expanded += expand_carousels(&mut el.children);
    }
    expanded
}

/// Replace a container's children with the slideshow structure.
fn build_structure(container: &mut Element, carousel: &Carousel) {
    let state = &carousel.state;

    let mut track = Element::new("div").with_attr("class", "carousel-track").with_attr(
        "style",
        format!("transform: translateX(-{}%)", state.offset_percent()),
    );

    for (index, slide) in carousel.slides.iter().enumerate() {
        let mut slide_el = Element::new("div");
        slide_el.set_class(if state.is_active(index) {
            "carousel-slide active"
        } else {
            "carousel-slide"
        });
        slide_el
            .children
            .push(Node::Element(Box::new(slide.image.clone())));
        if let Some(caption) = &slide.caption {
            slide_el.children.push(Node::Element(Box::new(
                Element::new("div")
                    .with_attr("class", "carousel-caption")
                    .with_text(caption),
            )));
        }
        track.children.push(Node::Element(Box::new(slide_el)));
    }

    let viewport = Element::new("div")
        .with_attr("class", "carousel-viewport")
        .with_child(Node::Element(Box::new(track)));

    let controls = Element::new("div")
        .with_attr("class", "carousel-controls")
        .with_child(nav_button("prev", "Previous image", "15 18 9 12 15 6"))
        .with_child(nav_button("next", "Next image", "9 18 15 12 9 6"));

    container.children.clear();
    container.children.push(Node::Element(Box::new(viewport)));
    container.children.push(Node::Element(Box::new(controls)));

    // Indicators only when there is something to indicate
    if carousel.slides.len() > 1 {
        let mut indicators = Element::new("div").with_attr("class", "carousel-indicators");
        for index in 0..carousel.slides.len() {
            let mut indicator = Element::new("button")
                .with_attr("type", "button")
                .with_attr("aria-label", format!("Go to image {}", index + 1));
            indicator.set_class(if state.is_active(index) {
                "carousel-indicator active"
            } else {
                "carousel-indicator"
            });
            indicators.children.push(Node::Element(Box::new(indicator)));
        }
        container.children.push(Node::Element(Box::new(indicators)));
    }

    container.add_class(CLASS_INITIALIZED);
    // Focusable, so arrow-key navigation can target the carousel
    container.set_attr("tabindex", "0");
}

/// A prev/next button with an inline chevron icon.
fn nav_button(direction: &str, label: &str, points: &str) -> Node {
    let polyline = Element::new("polyline").with_attr("points", points);
    let icon = Element::new("svg")
        .with_attr("width", "24")
        .with_attr("height", "24")
        .with_attr("viewBox", "0 0 24 24")
        .with_attr("fill", "none")
        .with_attr("stroke", "currentColor")
        .with_attr("stroke-width", "2")
        .with_child(Node::Element(Box::new(polyline)));

    Node::Element(Box::new(
        Element::new("button")
            .with_attr("class", format!("carousel-btn carousel-btn-{direction}"))
            .with_attr("type", "button")
            .with_attr("aria-label", label)
            .with_child(Node::Element(Box::new(icon))),
    ))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse::parse_fragment;
    use crate::dom::render::render_nodes;

    const THREE_IMAGES: &str = r#"<div class="carousel"><img src="a.png" alt="First"><img src="b.png"><img src="c.png" alt="Third"></div>"#;

    fn expand(html: &str) -> (Vec<Node>, usize) {
        let mut nodes = parse_fragment(html);
        let count = expand_carousels(&mut nodes);
        (nodes, count)
    }

    fn container(nodes: &[Node]) -> &Element {
        nodes[0].as_element().unwrap()
    }

    #[test]
    fn test_model_from_container() {
        let nodes = parse_fragment(THREE_IMAGES);
        let carousel = Carousel::from_container(container(&nodes)).unwrap();

        assert_eq!(carousel.slides.len(), 3);
        assert_eq!(carousel.slides[0].caption.as_deref(), Some("First"));
        assert_eq!(carousel.slides[1].caption, None);
        assert_eq!(carousel.slides[2].caption.as_deref(), Some("Third"));
        assert_eq!(carousel.state.current(), 0);
    }

    #[test]
    fn test_model_empty_container() {
        let nodes = parse_fragment(r#"<div class="carousel"><p>no images</p></div>"#);
        assert!(Carousel::from_container(container(&nodes)).is_none());
    }

    #[test]
    fn test_expand_builds_structure() {
        let (nodes, count) = expand(THREE_IMAGES);
        assert_eq!(count, 1);

        let el = container(&nodes);
        assert!(el.has_class("carousel-initialized"));
        assert_eq!(el.get_attr("tabindex"), Some("0"));

        let html = render_nodes(&nodes);
        assert_eq!(html.matches(r#"class="carousel-slide active""#).count(), 1);
        assert_eq!(html.matches("carousel-slide").count(), 3);
        assert_eq!(
            html.matches(r#"class="carousel-indicator active""#).count(),
            1
        );
        assert_eq!(html.matches("carousel-indicator").count(), 4); // 3 buttons + wrapper class
        assert!(html.contains(r#"style="transform: translateX(-0%)""#));
        assert!(html.contains("carousel-btn-prev"));
        assert!(html.contains("carousel-btn-next"));
        assert!(html.contains(r#"aria-label="Go to image 1""#));
        assert!(html.contains(r#"<div class="carousel-caption">First</div>"#));
    }

    #[test]
    fn test_expand_keeps_image_order() {
        let (nodes, _) = expand(THREE_IMAGES);
        let html = render_nodes(&nodes);
        let a = html.find("a.png").unwrap();
        let b = html.find("b.png").unwrap();
        let c = html.find("c.png").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_expand_single_image_no_indicators() {
        let (nodes, count) = expand(r#"<div class="carousel"><img src="a.png"></div>"#);
        assert_eq!(count, 1);
        let html = render_nodes(&nodes);
        assert!(!html.contains("carousel-indicators"));
        assert!(html.contains("carousel-btn-prev"));
    }

    #[test]
    fn test_expand_skips_empty_container() {
        let (nodes, count) = expand(r#"<div class="carousel"><p>text only</p></div>"#);
        assert_eq!(count, 0);
        let html = render_nodes(&nodes);
        assert!(!html.contains("carousel-initialized"));
        assert!(html.contains("text only"));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let (mut nodes, first) = expand(THREE_IMAGES);
        assert_eq!(first, 1);
        let after_first = render_nodes(&nodes);

        // Second scan over the same tree: no duplicate slides or controls
        let second = expand_carousels(&mut nodes);
        assert_eq!(second, 0);
        assert_eq!(render_nodes(&nodes), after_first);

        // Scan over re-parsed output (fresh tree from already-expanded markup)
        let mut reparsed = parse_fragment(&after_first);
        assert_eq!(expand_carousels(&mut reparsed), 0);
        assert_eq!(render_nodes(&reparsed), after_first);
    }

    #[test]
    fn test_expand_multiple_independent_carousels() {
        let html = r#"<div class="carousel"><img src="a.png"></div><p>mid</p><div class="carousel"><img src="b.png"><img src="c.png"></div>"#;
        let (nodes, count) = expand(html);
        assert_eq!(count, 2);

        let rendered = render_nodes(&nodes);
        assert_eq!(rendered.matches("carousel-initialized").count(), 2);
        // Only the two-slide carousel gets indicators
        assert_eq!(rendered.matches("carousel-indicators").count(), 1);
    }

    #[test]
    fn test_expand_nested_inside_section_markup() {
        let html = r#"<div class="wrap"><div class="carousel"><img src="a.png"></div></div>"#;
        let (nodes, count) = expand(html);
        assert_eq!(count, 1);
        assert!(render_nodes(&nodes).contains("carousel-viewport"));
    }

    #[test]
    fn test_wrap_click_from_last_slide() {
        let nodes = parse_fragment(THREE_IMAGES);
        let mut carousel = Carousel::from_container(container(&nodes)).unwrap();

        carousel.state.handle(Input::Indicator(2));
        assert_eq!(carousel.state.current(), 2);
        carousel.state.handle(Input::NextClick);
        assert_eq!(carousel.state.current(), 0);
        assert_eq!(carousel.state.offset_percent(), 0);
    }
}
