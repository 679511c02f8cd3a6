//! About page: sidebar + sectionized `about.html`.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::sectionize::sectionize;

use super::collapsible::render_collapsible;
use super::error::render_error_block;
use super::layout::render_page;
use super::sidebar::render_sidebar;

/// Render the about page document.
pub fn render(config: &SiteConfig, store: &ContentStore) -> String {
    let prefix = config.build.url_prefix();

    let mut body = String::new();
    body.push_str(r#"<div class="page-body">"#);
    body.push_str(&render_sidebar(&store.site, &prefix));
    body.push_str(r#"<main class="main-content">"#);

    match &store.about_html {
        Some(html) => body.push_str(&render_sections(html)),
        None => body.push_str(&render_error_block(
            "About unavailable",
            "about.html could not be loaded.",
            &prefix,
        )),
    }

    body.push_str("</main></div>");

    render_page(config, &store.site, "About", "/about/", &body)
}

/// Sectionize a write-up and render it: intro content inline, each
/// section as a collapsible (first one expanded), subsections collapsed.
pub fn render_sections(html: &str) -> String {
    let sectioned = sectionize(html);

    let mut out = String::new();
    if !sectioned.intro_content.is_empty() {
        out.push_str(r#"<div class="intro-content">"#);
        out.push_str(&sectioned.intro_content.concat());
        out.push_str("</div>");
    }

    for (index, section) in sectioned.sections.iter().enumerate() {
        let mut section_body = section.content.concat();
        for subsection in &section.subsections {
            section_body.push_str(&render_collapsible(
                &subsection.title,
                &subsection.content.concat(),
                false,
            ));
        }
        out.push_str(&render_collapsible(&section.title, &section_body, index == 0));
    }

    out
}
