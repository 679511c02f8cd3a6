//! Fallback error blocks and the 404 page.

use crate::config::SiteConfig;
use crate::content::site::SiteContent;
use crate::utils::html::escape;

use super::layout::render_page;

/// Render an inline error block with a navigation-back action.
///
/// Used wherever content failed to load: the page still renders, with
/// this block in place of the missing piece.
pub fn render_error_block(title: &str, message: &str, url_prefix: &str) -> String {
    format!(
        r#"<div class="error-message"><h2 class="heading-lg">{}</h2><p class="paragraph">{}</p><a class="text-link back-link" href="{url_prefix}/">Back to home</a></div>"#,
        escape(title),
        escape(message),
    )
}

/// Render the 404 document.
pub fn render_not_found(config: &SiteConfig, site: &SiteContent) -> String {
    let prefix = config.build.url_prefix();
    let body = format!(
        r#"<div class="page-body"><main class="main-content">{}</main></div>"#,
        render_error_block(
            "404 - Page Not Found",
            "The page you're looking for doesn't exist.",
            &prefix,
        )
    );
    render_page(config, site, "Not Found", "", &body)
}
