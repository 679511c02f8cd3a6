//! Text capsule rendering.
//!
//! Capsules are small pill buttons carrying either an external link
//! (`data-href`, opened in a new tab) or a clipboard payload
//! (`data-copy`). The behavior lives in the embedded capsule script.

use crate::content::site::{Contact, ContactKind};
use crate::utils::html::escape_attr;

use super::icons;

/// Render a capsule that opens a URL.
pub fn link_capsule(label: &str, url: &str, icon: &str) -> String {
    capsule(label, icon, "data-href", url)
}

/// Render a capsule that copies its payload to the clipboard.
pub fn copy_capsule(label: &str, payload: &str, icon: &str) -> String {
    capsule(label, icon, "data-copy", payload)
}

/// Render a capsule that opens a PDF overlay.
pub fn pdf_capsule(label: &str, url: &str, title: &str) -> String {
    format!(
        r#"<div class="text-capsule" data-pdf="{}" data-pdf-title="{}"><span class="capsule-icon">{}</span><span class="capsule-text">{}</span></div>"#,
        escape_attr(url),
        escape_attr(title),
        icons::FILE,
        crate::utils::html::escape(label),
    )
}

/// Render a contact capsule from site content.
///
/// Link contacts open their URL; email/phone contacts copy their label.
pub fn contact_capsule(contact: &Contact) -> String {
    match contact.kind {
        ContactKind::Link => link_capsule(
            &contact.label,
            contact.url.as_deref().unwrap_or_default(),
            icons::LINK,
        ),
        ContactKind::Email => copy_capsule(&contact.label, &contact.label, icons::MAIL),
        ContactKind::Phone => copy_capsule(&contact.label, &contact.label, icons::PHONE),
    }
}

fn capsule(label: &str, icon: &str, attr: &str, value: &str) -> String {
    format!(
        r#"<div class="text-capsule" {attr}="{}"><span class="capsule-icon">{icon}</span><span class="capsule-text">{}</span></div>"#,
        escape_attr(value),
        crate::utils::html::escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_capsule() {
        let html = link_capsule("GitHub", "https://github.com/janedoe", icons::LINK);
        assert!(html.contains(r#"data-href="https://github.com/janedoe""#));
        assert!(html.contains("GitHub"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_copy_capsule_escapes() {
        let html = copy_capsule("a&b@example.com", "a&b@example.com", icons::MAIL);
        assert!(html.contains("data-copy=\"a&amp;b@example.com\""));
    }

    #[test]
    fn test_contact_capsules() {
        let email = Contact {
            kind: ContactKind::Email,
            label: "jane@example.com".into(),
            url: None,
        };
        assert!(contact_capsule(&email).contains("data-copy"));

        let link = Contact {
            kind: ContactKind::Link,
            label: "GitHub".into(),
            url: Some("https://github.com/janedoe".into()),
        };
        assert!(contact_capsule(&link).contains("data-href"));
    }

    #[test]
    fn test_pdf_capsule() {
        let html = pdf_capsule("View Report", "/projects/X/report.pdf", "Report");
        assert!(html.contains(r#"data-pdf="/projects/X/report.pdf""#));
        assert!(html.contains(r#"data-pdf-title="Report""#));
    }
}
