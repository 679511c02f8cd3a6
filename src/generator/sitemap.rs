//! Sitemap generation.
//!
//! Emits `sitemap.xml` listing every built page route against the
//! configured site URL. Skipped (with a debug log) when `site.url` is
//! unset, since relative locations are useless to crawlers.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;

use crate::config::SiteConfig;
use crate::generator::minify_xml;
use crate::{debug, log};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap.xml for the given page routes.
pub fn build_sitemap(config: &SiteConfig, routes: &[String]) -> Result<()> {
    let Some(base_url) = config.site.url.as_deref() else {
        debug!("sitemap"; "site.url unset, skipping sitemap");
        return Ok(());
    };

    let base_url = base_url.trim_end_matches('/');
    let sitemap = Sitemap {
        urls: routes
            .iter()
            .filter(|route| !route.ends_with(".html")) // skip 404.html
            .map(|route| format!("{base_url}{route}"))
            .collect(),
    };

    let xml = sitemap.to_xml()?;
    let xml = minify_xml(xml.as_bytes(), config.build.minify);

    let sitemap_path = config.build.output.join("sitemap.xml");
    fs::write(&sitemap_path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    log!("sitemap"; "sitemap.xml ({} routes)", sitemap.urls.len());
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for url in &self.urls {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            writer.write_event(Event::Start(BytesStart::new("loc")))?;
            writer.write_event(Event::Text(BytesText::new(url)))?;
            writer.write_event(Event::End(BytesEnd::new("loc")))?;
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        String::from_utf8(writer.into_inner()).context("sitemap is not valid UTF-8")
    }
}
