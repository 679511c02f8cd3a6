//! Loaded content for one build.
//!
//! The store is rebuilt from disk on every build; nothing is cached
//! between builds except the freshness hashes kept by watch mode.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::load::{load_json, load_text};
use super::project::{Project, ProjectData, ProjectEntry};
use super::resume::ResumeContent;
use super::site::SiteContent;
use crate::config::SiteConfig;
use crate::log;

/// `home.json`: ordered intro sections for the home page.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HomeContent {
    #[serde(default)]
    pub sections: Vec<HomeSection>,
}

/// One home page block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeSection {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Everything a build renders from.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub site: SiteContent,
    pub home: HomeContent,
    /// Raw about write-up, sectionized at render time.
    pub about_html: Option<String>,
    pub resume: Option<ResumeContent>,
    pub projects: Vec<Project>,
}

impl ContentStore {
    /// Load all content from the configured content directory.
    ///
    /// `site.json` and `projects/config.json` are required; optional
    /// files (about, resume, home) degrade to empty content, and a
    /// broken per-project file skips that project with a warning so the
    /// rest of the site still builds.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let content_dir = &config.build.content;

        let site: SiteContent = load_json(&content_dir.join("site.json"))
            .context("failed to load site.json")?;

        let home = match load_json::<HomeContent>(&content_dir.join("home.json")) {
            Ok(home) => home,
            Err(err) => {
                log!("content"; "home.json unavailable, rendering empty home: {}", err.message());
                HomeContent::default()
            }
        };

        let about_html = match load_text(&content_dir.join("about.html")) {
            Ok(html) => Some(html),
            Err(err) => {
                log!("content"; "about.html unavailable: {}", err.message());
                None
            }
        };

        let resume = match load_json::<ResumeContent>(&content_dir.join("resume.json")) {
            Ok(resume) => Some(resume),
            Err(err) => {
                log!("content"; "resume.json unavailable: {}", err.message());
                None
            }
        };

        let projects = Self::load_projects(config)?;

        let store = Self {
            site,
            home,
            about_html,
            resume,
            projects,
        };
        store.check_slugs()?;
        Ok(store)
    }

    /// Load the project registry and each project's data file.
    fn load_projects(config: &SiteConfig) -> Result<Vec<Project>> {
        let registry_path = config.build.content.join("projects").join("config.json");
        let entries: Vec<ProjectEntry> =
            load_json(&registry_path).context("failed to load projects/config.json")?;

        let mut projects = Vec::with_capacity(entries.len());
        for entry in entries {
            match Self::load_project_data(config, &entry) {
                Ok(data) => projects.push(Project { entry, data }),
                Err(message) => {
                    log!("content"; "skipping project `{}`: {}", entry.slug, message);
                }
            }
        }
        Ok(projects)
    }

    fn load_project_data(config: &SiteConfig, entry: &ProjectEntry) -> Result<ProjectData, String> {
        let folder = Self::project_dir(config, &entry.folder);
        if !folder.is_dir() {
            return Err(format!("folder `{}` does not exist", entry.folder));
        }

        load_json(&folder.join(&entry.data_file)).map_err(|err| err.message())
    }

    /// Directory holding one project's assets.
    pub fn project_dir(config: &SiteConfig, folder: &str) -> PathBuf {
        config.build.content.join("projects").join(folder)
    }

    /// Find a project by slug.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.entry.slug == slug)
    }

    /// All categories across projects, sorted and de-duplicated.
    pub fn all_categories(&self) -> Vec<String> {
        let set: FxHashSet<&str> = self
            .projects
            .iter()
            .flat_map(|p| p.entry.categories.iter().map(String::as_str))
            .collect();
        let mut categories: Vec<String> = set.into_iter().map(str::to_string).collect();
        categories.sort();
        categories
    }

    /// Duplicate slugs make routes ambiguous; refuse to build.
    fn check_slugs(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for project in &self.projects {
            if !seen.insert(project.entry.slug.as_str()) {
                bail!("duplicate project slug `{}`", project.entry.slug);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home_json() {
        let json = r#"{
            "sections": [
                {"title": "About Me", "paragraphs": ["Hi!", "Welcome."]},
                {"title": "What I can do", "paragraphs": []}
            ]
        }"#;
        let home: HomeContent = serde_json::from_str(json).unwrap();
        assert_eq!(home.sections.len(), 2);
        assert_eq!(home.sections[0].paragraphs.len(), 2);
    }

    #[test]
    fn test_all_categories_sorted_unique() {
        use crate::content::project::{PdfRefs, ProjectData, ProjectEntry};

        let make = |slug: &str, categories: &[&str]| Project {
            entry: ProjectEntry {
                slug: slug.into(),
                folder: slug.into(),
                data_file: "p.json".into(),
                write_up: None,
                images: vec![],
                pdfs: PdfRefs::default(),
                categories: categories.iter().map(|s| s.to_string()).collect(),
            },
            data: ProjectData::default(),
        };

        let store = ContentStore {
            site: SiteContent::default(),
            home: HomeContent::default(),
            about_html: None,
            resume: None,
            projects: vec![make("a", &["web", "ml"]), make("b", &["ml", "viz"])],
        };

        assert_eq!(store.all_categories(), ["ml", "viz", "web"]);
        assert!(store.project_by_slug("a").is_some());
        assert!(store.project_by_slug("z").is_none());
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        use crate::content::project::{PdfRefs, ProjectData, ProjectEntry};

        let make = |slug: &str| Project {
            entry: ProjectEntry {
                slug: slug.into(),
                folder: slug.into(),
                data_file: "p.json".into(),
                write_up: None,
                images: vec![],
                pdfs: PdfRefs::default(),
                categories: vec![],
            },
            data: ProjectData::default(),
        };

        let store = ContentStore {
            site: SiteContent::default(),
            home: HomeContent::default(),
            about_html: None,
            resume: None,
            projects: vec![make("same"), make("same")],
        };

        assert!(store.check_slugs().is_err());
    }
}
