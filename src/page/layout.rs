//! Document shell: head, top navigation, footer, runtime scripts.

use crate::config::SiteConfig;
use crate::content::site::SiteContent;
use crate::utils::html::{escape, escape_attr};

/// Scripts loaded on every page (the filter script no-ops without cards).
const RUNTIME_SCRIPTS: [&str; 4] = [
    "assets/carousel.js",
    "assets/overlay.js",
    "assets/capsule.js",
    "assets/filter.js",
];

/// Render a complete HTML document around a page body.
///
/// `route` is the page's site-root route, used to mark the current
/// navigation item.
pub fn render_page(
    config: &SiteConfig,
    site: &SiteContent,
    title: &str,
    route: &str,
    body: &str,
) -> String {
    let prefix = config.build.url_prefix();
    let full_title = if title.is_empty() {
        config.site.title.clone()
    } else {
        format!("{} · {}", title, config.site.title)
    };

    let mut out = String::with_capacity(body.len() + 2048);
    out.push_str("<!doctype html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n",
        escape_attr(&config.site.language)
    ));

    // Head
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&full_title)));
    if !config.site.description.is_empty() {
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_attr(&config.site.description)
        ));
    }
    if !config.site.author.is_empty() {
        out.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape_attr(&config.site.author)
        ));
    }
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{prefix}/assets/site.css\">\n"
    ));
    out.push_str("</head>\n<body>\n");

    // Top navigation
    out.push_str(&render_nav(config, site, route, &prefix));

    out.push_str(body);

    out.push_str(&format!(
        "<footer class=\"site-footer\">{}</footer>\n",
        escape(&config.site.title)
    ));

    for script in RUNTIME_SCRIPTS {
        out.push_str(&format!(
            "<script src=\"{prefix}/{script}\" defer></script>\n"
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_nav(config: &SiteConfig, site: &SiteContent, route: &str, prefix: &str) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"top-nav\">");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"{prefix}/\">{}</a>",
        escape(&config.site.title)
    ));
    for item in &site.nav {
        let current = if item.route == route { " class=\"current\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"{prefix}{}\"{current}>{}</a>",
            escape_attr(&item.route),
            escape(&item.label)
        ));
    }
    out.push_str("</nav>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site::NavItem;

    fn setup() -> (SiteConfig, SiteContent) {
        let mut config = SiteConfig::default();
        config.site.title = "Jane Doe".into();
        config.site.description = "Portfolio".into();
        config.site.author = "Jane".into();

        let site = SiteContent {
            nav: vec![
                NavItem {
                    label: "Home".into(),
                    route: "/".into(),
                },
                NavItem {
                    label: "Projects".into(),
                    route: "/projects/".into(),
                },
            ],
            ..SiteContent::default()
        };
        (config, site)
    }

    #[test]
    fn test_layout_shell() {
        let (config, site) = setup();
        let html = render_page(&config, &site, "Projects", "/projects/", "<main>X</main>");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Projects · Jane Doe</title>"));
        assert!(html.contains(r#"<meta name="description" content="Portfolio">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/site.css">"#));
        assert!(html.contains("<main>X</main>"));
        assert!(html.contains(r#"<script src="/assets/carousel.js" defer></script>"#));
    }

    #[test]
    fn test_current_nav_item_marked() {
        let (config, site) = setup();
        let html = render_page(&config, &site, "Projects", "/projects/", "");
        assert!(html.contains(r#"<a href="/projects/" class="current">Projects</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn test_empty_title_uses_site_title() {
        let (config, site) = setup();
        let html = render_page(&config, &site, "", "/", "");
        assert!(html.contains("<title>Jane Doe</title>"));
    }

    #[test]
    fn test_prefix_applied() {
        let (mut config, site) = setup();
        config.build.path_prefix = std::path::PathBuf::from("portfolio");
        let html = render_page(&config, &site, "", "/", "");
        assert!(html.contains(r#"href="/portfolio/assets/site.css""#));
        assert!(html.contains(r#"<a href="/portfolio/projects/">"#));
    }
}
