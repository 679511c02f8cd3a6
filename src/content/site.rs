//! `site.json`: profile, contact capsules, and navigation.

use serde::Deserialize;

/// Top-level site content.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

/// Sidebar profile block.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Portrait image path, relative to the static assets root.
    #[serde(default)]
    pub portrait: Option<String>,
    /// Tagline lines rendered under the portrait.
    #[serde(default)]
    pub tagline: Vec<String>,
}

/// How a contact capsule behaves when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Opens the URL in a new tab.
    Link,
    /// Copies the label (an address) to the clipboard.
    Email,
    /// Copies the label (a number) to the clipboard.
    Phone,
}

/// One contact capsule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Contact {
    /// Link capsules need a URL; copy capsules (email/phone) carry their
    /// payload in the label.
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            ContactKind::Link => self.url.is_some(),
            ContactKind::Email | ContactKind::Phone => !self.label.trim().is_empty(),
        }
    }
}

/// One top navigation item.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    /// Site-root route, e.g. `/projects/`.
    pub route: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_json() {
        let json = r#"{
            "profile": {
                "name": "Jane Doe",
                "portrait": "portrait.jpeg",
                "tagline": ["Graduated in", "Data Science"]
            },
            "contacts": [
                {"kind": "link", "label": "GitHub", "url": "https://github.com/janedoe"},
                {"kind": "email", "label": "jane@example.com"},
                {"kind": "phone", "label": "+1 555 0100"}
            ],
            "nav": [
                {"label": "Home", "route": "/"},
                {"label": "Projects", "route": "/projects/"}
            ]
        }"#;

        let site: SiteContent = serde_json::from_str(json).unwrap();
        assert_eq!(site.profile.name, "Jane Doe");
        assert_eq!(site.contacts.len(), 3);
        assert_eq!(site.contacts[0].kind, ContactKind::Link);
        assert_eq!(site.contacts[1].kind, ContactKind::Email);
        assert_eq!(site.nav[1].route, "/projects/");
    }

    #[test]
    fn test_contact_well_formed() {
        let link_without_url = Contact {
            kind: ContactKind::Link,
            label: "GitHub".into(),
            url: None,
        };
        assert!(!link_without_url.is_well_formed());

        let email = Contact {
            kind: ContactKind::Email,
            label: "jane@example.com".into(),
            url: None,
        };
        assert!(email.is_well_formed());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"profile": {"name": "X", "unknown": 1}}"#;
        assert!(serde_json::from_str::<SiteContent>(json).is_err());
    }
}
