//! Auxiliary output generators.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`), emitted from the
//!   build's page route list.

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
