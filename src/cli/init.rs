//! Site initialization.
//!
//! Scaffolds a new portfolio site: config file, content skeleton, and
//! static assets directory. Refuses to overwrite an existing config.

use anyhow::{Result, bail};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::log;

const CONFIG_TEMPLATE: &str = r#"[site]
title = "Your Name"
description = "Personal portfolio"
author = "Your Name"
# url = "https://yourname.github.io/portfolio"
language = "en"

[build]
content = "content"
assets = "static"
output = "public"
minify = true

[serve]
interface = "127.0.0.1"
port = 4173
watch = true
"#;

const SITE_JSON: &str = r#"{
    "profile": {
        "name": "Your Name",
        "portrait": null,
        "tagline": ["Add a few lines", "about yourself"]
    },
    "contacts": [
        {"kind": "link", "label": "GitHub", "url": "https://github.com/yourname"},
        {"kind": "email", "label": "you@example.com"}
    ],
    "nav": [
        {"label": "Home", "route": "/"},
        {"label": "About", "route": "/about/"},
        {"label": "Projects", "route": "/projects/"},
        {"label": "Resume", "route": "/resume/"}
    ]
}
"#;

const HOME_JSON: &str = r#"{
    "sections": [
        {
            "title": "Welcome",
            "paragraphs": ["Hi, nice to see you here :)"]
        }
    ]
}
"#;

const RESUME_JSON: &str = r#"{
    "degrees": [],
    "experience": null,
    "skills": []
}
"#;

const ABOUT_HTML: &str = r#"<p>Introduce yourself here.</p>
<h2>Hobbies</h2>
<p>What do you do outside work?</p>
"#;

/// Create a new site with default structure.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    validate_target(root, &config.config_path)?;

    create_structure(root)?;
    write_files(root, &config.config_path)?;

    log!("init"; "Site initialized at {}", root.display());
    log!("init"; "Run `folio serve` to preview it");
    Ok(())
}

/// Refuse to scaffold over an existing site.
fn validate_target(root: &Path, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "`{}` already exists, refusing to overwrite",
            config_path.display()
        );
    }
    if root.exists() && !root.is_dir() {
        bail!("`{}` exists and is not a directory", root.display());
    }
    Ok(())
}

fn create_structure(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("content").join("projects"))?;
    fs::create_dir_all(root.join("static"))?;
    Ok(())
}

fn write_files(root: &Path, config_path: &Path) -> Result<()> {
    fs::write(config_path, CONFIG_TEMPLATE)?;

    let content = root.join("content");
    fs::write(content.join("site.json"), SITE_JSON)?;
    fs::write(content.join("home.json"), HOME_JSON)?;
    fs::write(content.join("resume.json"), RESUME_JSON)?;
    fs::write(content.join("about.html"), ABOUT_HTML)?;
    fs::write(content.join("projects").join("config.json"), "[]\n")?;

    fs::write(root.join(".gitignore"), "/public\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_structure() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        let config_path = root.join("folio.toml");

        create_structure(&root).unwrap();
        write_files(&root, &config_path).unwrap();

        assert!(config_path.is_file());
        assert!(root.join("content/site.json").is_file());
        assert!(root.join("content/projects/config.json").is_file());
        assert!(root.join("static").is_dir());

        // Scaffolded config parses cleanly
        let parsed = SiteConfig::from_str(&fs::read_to_string(&config_path).unwrap());
        assert!(parsed.is_ok());

        // Scaffolded content parses cleanly
        let site: crate::content::site::SiteContent =
            serde_json::from_str(&fs::read_to_string(root.join("content/site.json")).unwrap())
                .unwrap();
        assert_eq!(site.nav.len(), 4);
    }

    #[test]
    fn test_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folio.toml");
        fs::write(&config_path, "").unwrap();

        assert!(validate_target(dir.path(), &config_path).is_err());
    }
}
