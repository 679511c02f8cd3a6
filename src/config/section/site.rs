//! `[site]` section configuration.
//!
//! Site-wide metadata used by the page layout and the sitemap.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Jane Doe"
//! description = "Personal portfolio"
//! author = "Jane Doe"
//! url = "https://janedoe.github.io/portfolio"
//! language = "en"
//! ```
//!
//! When `url` carries a path component (GitHub Pages project site), that
//! component becomes the `path_prefix` for production link generation.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, shown in the browser tab and the navigation brand.
    pub title: String,

    /// Site description for the meta description tag.
    pub description: String,

    /// Author name for the meta author tag.
    pub author: String,

    /// Public site URL. Optional; enables sitemap generation and
    /// path-prefix derivation for subdirectory deployments.
    pub url: Option<String>,

    /// Language code (BCP 47) for the html lang attribute.
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            url: None,
            language: "en".to_string(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("site.title"),
                "title must not be empty",
                "set [site] title in folio.toml",
            );
        }

        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                format!("`{url}` is not a valid URL"),
                "use an absolute http(s) URL, e.g. https://example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_site_fields() {
        let config = test_parse_config(
            "url = \"https://example.com/portfolio\"\nauthor = \"Jane\"\nlanguage = \"it\"",
        );
        assert_eq!(config.site.author, "Jane");
        assert_eq!(config.site.language, "it");
        assert_eq!(
            config.site.url.as_deref(),
            Some("https://example.com/portfolio")
        );
    }

    #[test]
    fn test_site_invalid_url() {
        let config = test_parse_config("url = \"not a url\"");
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
