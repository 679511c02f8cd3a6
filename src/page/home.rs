//! Home page: sidebar + intro sections from `home.json`.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::utils::html::escape;

use super::layout::render_page;
use super::sidebar::render_sidebar;

/// Render the home page document.
pub fn render(config: &SiteConfig, store: &ContentStore) -> String {
    let prefix = config.build.url_prefix();

    let mut body = String::new();
    body.push_str(r#"<div class="page-body">"#);
    body.push_str(&render_sidebar(&store.site, &prefix));
    body.push_str(r#"<main class="main-content">"#);

    for section in &store.home.sections {
        body.push_str(&format!(
            r#"<section><h1 class="heading-xl">{}</h1>"#,
            escape(&section.title)
        ));
        for paragraph in &section.paragraphs {
            body.push_str(&format!(
                r#"<p class="paragraph">{}</p>"#,
                escape(paragraph)
            ));
        }
        body.push_str("</section>");
    }

    body.push_str("</main></div>");

    render_page(config, &store.site, "", "/", &body)
}
