//! Content validation.
//!
//! Checks that everything the registry references actually exists:
//! project folders, data files, write-ups, images, PDFs. Also validates
//! slugs, contact capsules, and image references inside write-ups.
//! Failures print as grouped diagnostics with field paths.

use anyhow::Result;
use std::path::Path;

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, SiteConfig};
use crate::content::load::{load_json, load_text};
use crate::content::project::{ProjectData, ProjectEntry};
use crate::content::site::SiteContent;
use crate::content::store::ContentStore;
use crate::dom::{Node, parse::parse_fragment};
use crate::log;
use crate::utils::plural::plural_s;
use crate::utils::slug::is_valid_slug;

/// Validate the site's content. Exits non-zero on failure via `?`.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let mut diag = ConfigDiagnostics::new();

    validate_site_json(config, &mut diag);
    let checked = validate_projects(config, &mut diag);

    if diag.has_errors() {
        let count = diag.len();
        eprintln!("{}", ConfigError::Diagnostics(diag));
        anyhow::bail!("validation failed with {} error{}", count, plural_s(count));
    }

    log!("validate"; "{} project{} ok", checked, plural_s(checked));
    Ok(())
}

fn validate_site_json(config: &SiteConfig, diag: &mut ConfigDiagnostics) {
    let path = config.build.content.join("site.json");
    let site: SiteContent = match load_json(&path) {
        Ok(site) => site,
        Err(err) => {
            diag.error(FieldPath::new("content.site"), err.message());
            return;
        }
    };

    for (index, contact) in site.contacts.iter().enumerate() {
        if !contact.is_well_formed() {
            diag.error_with_hint(
                FieldPath::owned(format!("site.contacts[{index}]")),
                "link contact without a url (or copy contact with empty label)",
                "link contacts need `url`; email/phone carry their payload in `label`",
            );
        }
    }
}

/// Validate the registry and each project's files. Returns the number of
/// entries checked.
fn validate_projects(config: &SiteConfig, diag: &mut ConfigDiagnostics) -> usize {
    let registry_path = config.build.content.join("projects").join("config.json");
    let entries: Vec<ProjectEntry> = match load_json(&registry_path) {
        Ok(entries) => entries,
        Err(err) => {
            diag.error(FieldPath::new("content.projects"), err.message());
            return 0;
        }
    };

    let mut seen_slugs = rustc_hash::FxHashSet::default();
    for (index, entry) in entries.iter().enumerate() {
        let field = |name: &str| FieldPath::owned(format!("projects[{index}].{name}"));

        if !is_valid_slug(&entry.slug) {
            diag.error_with_hint(
                field("slug"),
                format!("`{}` is not a valid slug", entry.slug),
                "use lowercase ascii words separated by dashes",
            );
        }
        if !seen_slugs.insert(entry.slug.clone()) {
            diag.error(field("slug"), format!("duplicate slug `{}`", entry.slug));
        }

        let folder = ContentStore::project_dir(config, &entry.folder);
        if !folder.is_dir() {
            diag.error(
                field("folder"),
                format!("folder `{}` does not exist", entry.folder),
            );
            continue;
        }

        validate_project_files(entry, &folder, index, diag);
    }

    entries.len()
}

fn validate_project_files(
    entry: &ProjectEntry,
    folder: &Path,
    index: usize,
    diag: &mut ConfigDiagnostics,
) {
    let field = |name: &str| FieldPath::owned(format!("projects[{index}].{name}"));

    // Data file must exist and parse
    if let Err(err) = load_json::<ProjectData>(&folder.join(&entry.data_file)) {
        diag.error(field("data_file"), err.message());
    }

    // Referenced images and PDFs must exist
    for image in &entry.images {
        if !folder.join(image).is_file() {
            diag.error(field("images"), format!("image `{image}` not found"));
        }
    }
    for (role, pdf) in [("report", &entry.pdfs.report), ("slides", &entry.pdfs.slides)] {
        if let Some(pdf) = pdf
            && !folder.join(pdf).is_file()
        {
            diag.error(
                FieldPath::owned(format!("projects[{index}].pdfs.{role}")),
                format!("`{pdf}` not found"),
            );
        }
    }

    // Write-up must exist, and its relative image references must resolve
    if let Some(write_up) = &entry.write_up {
        match load_text(&folder.join(write_up)) {
            Ok(html) => {
                for src in relative_image_sources(&html) {
                    if !folder.join(&src).is_file() {
                        diag.error_with_hint(
                            field("write_up"),
                            format!("`{write_up}` references missing image `{src}`"),
                            "image paths in write-ups are relative to the project folder",
                        );
                    }
                }
            }
            Err(err) => diag.error(field("write_up"), err.message()),
        }
    }
}

/// Collect relative image sources from a write-up fragment.
fn relative_image_sources(html: &str) -> Vec<String> {
    let nodes = parse_fragment(html);
    let mut sources = Vec::new();
    collect_sources(&nodes, &mut sources);
    sources
}

fn collect_sources(nodes: &[Node], out: &mut Vec<String>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.is_tag("img")
                && let Some(src) = el.get_attr("src")
                && !src.starts_with("http")
                && !src.starts_with('/')
                && !src.starts_with("data:")
            {
                out.push(src.to_string());
            }
            collect_sources(&el.children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = root.to_path_buf();
        config
    }

    fn write_minimal_site(root: &Path) {
        fs::create_dir_all(root.join("projects")).unwrap();
        fs::write(root.join("site.json"), r#"{"profile": {"name": "J"}}"#).unwrap();
    }

    #[test]
    fn test_relative_image_sources() {
        let sources = relative_image_sources(
            r#"<img src="a.png"><div><img src="b.png"></div><img src="https://x/c.png"><img src="/d.png">"#,
        );
        assert_eq!(sources, ["a.png", "b.png"]);
    }

    #[test]
    fn test_valid_site_passes() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_site(dir.path());
        let folder = dir.path().join("projects/Demo");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("project.json"), r#"{"name": "Demo"}"#).unwrap();
        fs::write(
            dir.path().join("projects/config.json"),
            r#"[{"slug": "demo", "folder": "Demo", "data_file": "project.json"}]"#,
        )
        .unwrap();

        assert!(validate_site(&site_config(dir.path())).is_ok());
    }

    #[test]
    fn test_missing_folder_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_site(dir.path());
        fs::write(
            dir.path().join("projects/config.json"),
            r#"[{"slug": "ghost", "folder": "Ghost", "data_file": "project.json"}]"#,
        )
        .unwrap();

        assert!(validate_site(&site_config(dir.path())).is_err());
    }

    #[test]
    fn test_bad_slug_and_duplicate_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_site(dir.path());
        for folder in ["A", "B"] {
            let path = dir.path().join("projects").join(folder);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("project.json"), r#"{"name": "X"}"#).unwrap();
        }
        fs::write(
            dir.path().join("projects/config.json"),
            r#"[
                {"slug": "Bad Slug", "folder": "A", "data_file": "project.json"},
                {"slug": "Bad Slug", "folder": "B", "data_file": "project.json"}
            ]"#,
        )
        .unwrap();

        let mut diag = ConfigDiagnostics::new();
        validate_projects(&site_config(dir.path()), &mut diag);
        // Invalid slug reported twice (once per entry) plus one duplicate
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_write_up_missing_image_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_site(dir.path());
        let folder = dir.path().join("projects/Demo");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("project.json"), r#"{"name": "Demo"}"#).unwrap();
        fs::write(folder.join("writeup.html"), r#"<img src="missing.png">"#).unwrap();
        fs::write(
            dir.path().join("projects/config.json"),
            r#"[{"slug": "demo", "folder": "Demo", "data_file": "project.json", "write_up": "writeup.html"}]"#,
        )
        .unwrap();

        let mut diag = ConfigDiagnostics::new();
        validate_projects(&site_config(dir.path()), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("missing.png"));
    }
}
