//! `[build]` section configuration.
//!
//! Build paths and output behavior.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"   # JSON/HTML content directory
//! assets = "static"     # static assets copied verbatim
//! output = "public"     # build output directory
//! minify = true         # trim inter-tag whitespace in HTML output
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory holding site.json, resume.json, projects/, etc.
    pub content: PathBuf,

    /// Static assets directory, copied verbatim into the output.
    pub assets: PathBuf,

    /// Output directory for the built site.
    pub output: PathBuf,

    /// Trim inter-tag whitespace in rendered HTML.
    pub minify: bool,

    /// Clean output directory completely before building.
    /// CLI-only (`--clean`), not read from folio.toml.
    #[serde(skip)]
    pub clean: bool,

    /// URL path prefix for subdirectory deployments.
    /// Derived from `site.url`, never set directly.
    #[serde(skip)]
    pub path_prefix: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            assets: PathBuf::from("static"),
            output: PathBuf::from("public"),
            minify: true,
            clean: false,
            path_prefix: PathBuf::new(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate raw (pre-normalization) paths: they must be relative.
    ///
    /// Must run before normalization turns everything absolute.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let checks: [(&'static str, &Path); 3] = [
            ("build.content", &self.content),
            ("build.assets", &self.assets),
            ("build.output", &self.output),
        ];
        for (field, path) in checks {
            if path.is_absolute() {
                diag.error_with_hint(
                    FieldPath::new(field),
                    format!("`{}` must be relative to the site root", path.display()),
                    "drop the leading slash",
                );
            }
        }
    }

    /// Validate normalized paths for build/serve commands.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                FieldPath::new("build.content"),
                format!("content directory `{}` does not exist", self.content.display()),
                "run `folio init` to scaffold a site",
            );
        }
        // assets dir is optional; a missing one just means nothing to copy
    }

    /// URL path prefix in `/a/b` form (empty string when unset).
    pub fn url_prefix(&self) -> String {
        let parts: Vec<_> = self
            .path_prefix
            .iter()
            .filter_map(|c| c.to_str())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            String::new()
        } else {
            format!("/{}", parts.join("/"))
        }
    }
}
