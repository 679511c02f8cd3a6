//! Profile sidebar: portrait, tagline, contact capsules.

use crate::content::site::SiteContent;
use crate::utils::html::{escape, escape_attr};

use super::capsule::contact_capsule;

/// Render the profile sidebar shared by home and resume pages.
pub fn render_sidebar(site: &SiteContent, url_prefix: &str) -> String {
    let mut out = String::new();
    out.push_str(r#"<aside class="sidebar"><div class="sidebar-content">"#);

    if let Some(portrait) = &site.profile.portrait {
        out.push_str(&format!(
            r#"<img src="{url_prefix}/assets/{}" alt="{}" class="sidebar-image">"#,
            escape_attr(portrait),
            escape_attr(&site.profile.name),
        ));
    }

    if !site.profile.tagline.is_empty() {
        out.push_str(r#"<div class="sidebar-info"><p class="paragraph">"#);
        let lines: Vec<String> = site
            .profile
            .tagline
            .iter()
            .map(|line| escape(line).into_owned())
            .collect();
        out.push_str(&lines.join("<br>"));
        out.push_str("</p></div>");
    }

    if !site.contacts.is_empty() {
        out.push_str(r#"<div class="sidebar-contacts">"#);
        for contact in &site.contacts {
            out.push_str(&contact_capsule(contact));
        }
        out.push_str("</div>");
    }

    out.push_str("</div></aside>");
    out
}
