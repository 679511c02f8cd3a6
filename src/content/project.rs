//! Project registry and per-project data.
//!
//! All slug→folder mapping lives in one declared configuration resource,
//! `projects/config.json`; application code never hard-codes it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

// =============================================================================
// Registry entries (projects/config.json)
// =============================================================================

/// One entry of `projects/config.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    /// URL slug, also the page route segment.
    pub slug: String,
    /// Folder under `projects/` holding the project's assets.
    pub folder: String,
    /// Project data JSON inside the folder.
    pub data_file: String,
    /// HTML write-up inside the folder (optional).
    #[serde(default)]
    pub write_up: Option<String>,
    /// Image files the project references (validated, copied verbatim).
    #[serde(default)]
    pub images: Vec<String>,
    /// PDF documents by role.
    #[serde(default)]
    pub pdfs: PdfRefs,
    /// Filter categories.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// PDF documents attached to a project.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PdfRefs {
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub slides: Option<String>,
}

// =============================================================================
// Per-project data
// =============================================================================

/// Per-project data file contents.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectData {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub notes_url: Option<String>,
    /// Collaborator profile URLs.
    #[serde(default)]
    pub collaborators: Vec<String>,
    /// Canonical shape: category → keyword list. Legacy shapes (flat list,
    /// comma-separated string, `keyWords` field name) migrate on load.
    #[serde(default, alias = "keyWords", deserialize_with = "deserialize_keywords")]
    pub keywords: Keywords,
}

/// Ordered keyword categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keywords(pub Vec<(String, Vec<String>)>);

impl Keywords {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<String>)> {
        self.0.iter()
    }
}

/// Migrate any legacy keyword shape into the canonical category map.
///
/// - `"a, b"` → `{"Keywords": ["a", "b"]}`
/// - `["a", "b"]` → `{"Keywords": ["a", "b"]}`
/// - `{"Models": ["a"], "Tools": "x, y"}` → categories kept in order,
///   string values split on commas
fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Keywords, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(keywords_from_value(value))
}

fn keywords_from_value(value: serde_json::Value) -> Keywords {
    use serde_json::Value;

    match value {
        Value::String(s) => Keywords(vec![("Keywords".to_string(), split_list(&s))]),
        Value::Array(items) => {
            let list: Vec<String> = items.into_iter().filter_map(value_to_string).collect();
            if list.is_empty() {
                Keywords::default()
            } else {
                Keywords(vec![("Keywords".to_string(), list)])
            }
        }
        Value::Object(map) => {
            let mut categories = Vec::with_capacity(map.len());
            for (category, entry) in map {
                let list = match entry {
                    Value::String(s) => split_list(&s),
                    Value::Array(items) => {
                        items.into_iter().filter_map(value_to_string).collect()
                    }
                    _ => Vec::new(),
                };
                if !list.is_empty() {
                    categories.push((category, list));
                }
            }
            Keywords(categories)
        }
        _ => Keywords::default(),
    }
}

fn value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Loaded project
// =============================================================================

/// A registry entry joined with its loaded data file.
#[derive(Debug, Clone)]
pub struct Project {
    pub entry: ProjectEntry,
    pub data: ProjectData,
}

impl Project {
    /// Page route for this project.
    pub fn route(&self) -> String {
        format!("/projects/{}/", self.entry.slug)
    }

    /// URL of one of the project's own asset files.
    pub fn asset_url(&self, url_prefix: &str, file: &str) -> String {
        format!("{url_prefix}/projects/{}/{file}", self.entry.folder)
    }
}

// =============================================================================
// Capsule label derivation
// =============================================================================

static PROFILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/([^/]+)").unwrap());
static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/[^/]+/([^/]+)").unwrap());

/// Derive a collaborator display name from a profile URL.
pub fn collaborator_label(url: &str) -> String {
    match PROFILE_NAME.captures(url).and_then(|c| c.get(1)) {
        Some(m) => title_case(&m.as_str().replace('-', " ")),
        None => "View Profile".to_string(),
    }
}

/// Derive a repository display name from a repository URL.
pub fn repository_label(url: &str) -> String {
    match REPO_NAME.captures(url).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().replace('-', " "),
        None => "View Repository".to_string(),
    }
}

/// Format a category identifier for display.
pub fn category_label(category: &str) -> String {
    title_case(&category.replace('_', " "))
}

/// Uppercase the first letter of each word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let json = r#"{
            "slug": "data-mining-1",
            "folder": "DataMining1",
            "data_file": "project.json",
            "write_up": "writeup.html",
            "images": ["clusters.png"],
            "pdfs": {"report": "report.pdf", "slides": "slides.pdf"},
            "categories": ["data_mining", "python"]
        }"#;

        let entry: ProjectEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.slug, "data-mining-1");
        assert_eq!(entry.pdfs.report.as_deref(), Some("report.pdf"));
        assert_eq!(entry.categories.len(), 2);
    }

    #[test]
    fn test_keywords_canonical_map() {
        let json = r#"{"name": "X", "keywords": {"Models": ["k-means", "DBSCAN"], "Tools": ["scikit-learn"]}}"#;
        let data: ProjectData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.keywords.0,
            vec![
                (
                    "Models".to_string(),
                    vec!["k-means".to_string(), "DBSCAN".to_string()]
                ),
                ("Tools".to_string(), vec!["scikit-learn".to_string()]),
            ]
        );
    }

    #[test]
    fn test_keywords_legacy_list() {
        let json = r#"{"name": "X", "keywords": ["clustering", "pandas"]}"#;
        let data: ProjectData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.keywords.0,
            vec![(
                "Keywords".to_string(),
                vec!["clustering".to_string(), "pandas".to_string()]
            )]
        );
    }

    #[test]
    fn test_keywords_legacy_string() {
        let json = r#"{"name": "X", "keywords": "clustering, pandas , "}"#;
        let data: ProjectData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.keywords.0,
            vec![(
                "Keywords".to_string(),
                vec!["clustering".to_string(), "pandas".to_string()]
            )]
        );
    }

    #[test]
    fn test_keywords_legacy_field_name() {
        let json = r#"{"name": "X", "keyWords": ["a"]}"#;
        let data: ProjectData = serde_json::from_str(json).unwrap();
        assert!(!data.keywords.is_empty());
    }

    #[test]
    fn test_keywords_map_with_string_values() {
        let json = r#"{"name": "X", "keywords": {"Tools": "a, b"}}"#;
        let data: ProjectData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.keywords.0,
            vec![("Tools".to_string(), vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn test_keywords_absent() {
        let data: ProjectData = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(data.keywords.is_empty());
    }

    #[test]
    fn test_collaborator_label() {
        assert_eq!(
            collaborator_label("https://www.linkedin.com/in/jane-doe"),
            "Jane Doe"
        );
        assert_eq!(collaborator_label("https://example.com/jane"), "View Profile");
    }

    #[test]
    fn test_repository_label() {
        assert_eq!(
            repository_label("https://github.com/janedoe/data-mining-project"),
            "data mining project"
        );
        assert_eq!(repository_label("https://gitlab.com/x/y"), "View Repository");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("data_mining"), "Data Mining");
        assert_eq!(category_label("web"), "Web");
    }

    #[test]
    fn test_project_routes() {
        let project = Project {
            entry: ProjectEntry {
                slug: "thesis".into(),
                folder: "Thesis".into(),
                data_file: "project.json".into(),
                write_up: None,
                images: vec![],
                pdfs: PdfRefs::default(),
                categories: vec![],
            },
            data: ProjectData::default(),
        };
        assert_eq!(project.route(), "/projects/thesis/");
        assert_eq!(
            project.asset_url("", "clusters.png"),
            "/projects/Thesis/clusters.png"
        );
        assert_eq!(
            project.asset_url("/portfolio", "report.pdf"),
            "/portfolio/projects/Thesis/report.pdf"
        );
    }
}
