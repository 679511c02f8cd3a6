//! Embedded static resources.
//!
//! - `serve` - dev server templates (loading.html, hotreload.js)
//! - `assets` - site runtime files written into the build output
//!   (stylesheet, carousel/overlay/capsule/filter scripts)

mod template;

pub use template::{Template, TemplateVars};

use anyhow::Result;
use std::fs;
use std::path::Path;

/// One embedded asset written verbatim into the output.
pub struct EmbeddedAsset {
    /// Output path relative to the output root.
    pub path: &'static str,
    pub content: &'static str,
}

/// Site runtime assets shipped with every build.
pub const SITE_ASSETS: &[EmbeddedAsset] = &[
    EmbeddedAsset {
        path: "assets/site.css",
        content: include_str!("assets/site.css"),
    },
    EmbeddedAsset {
        path: "assets/carousel.js",
        content: include_str!("assets/carousel.js"),
    },
    EmbeddedAsset {
        path: "assets/overlay.js",
        content: include_str!("assets/overlay.js"),
    },
    EmbeddedAsset {
        path: "assets/capsule.js",
        content: include_str!("assets/capsule.js"),
    },
    EmbeddedAsset {
        path: "assets/filter.js",
        content: include_str!("assets/filter.js"),
    },
];

/// Write all embedded site assets into the output directory.
pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
    for asset in SITE_ASSETS {
        let target = output_dir.join(asset.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, asset.content)?;
    }
    Ok(())
}

pub mod serve {
    use super::{Template, TemplateVars};

    /// In-memory route for the hot reload client script.
    pub const HOTRELOAD_JS_PATH: &str = "/__folio/hotreload.js";

    /// Variables for hotreload.js template.
    pub struct HotreloadVars {
        pub ws_port: u16,
    }

    impl TemplateVars for HotreloadVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__WS_PORT__", &self.ws_port.to_string())
        }
    }

    /// Hot reload client script.
    pub const HOTRELOAD_JS: Template<HotreloadVars> =
        Template::new(include_str!("serve/hotreload.js"));

    /// Script tag injected before `</body>` of served HTML.
    pub fn hotreload_tag() -> String {
        format!(r#"<script src="{HOTRELOAD_JS_PATH}"></script>"#)
    }

    /// Page shown while the initial build is still running.
    pub const LOADING_HTML: &str = include_str!("serve/loading.html");
}
