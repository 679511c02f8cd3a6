//! Site build orchestration.
//!
//! A build is: prepare the output directory, copy static and project
//! assets, load content, render every page in parallel, and (for
//! production builds) emit the sitemap. Content failures degrade to
//! fallback blocks inside the affected page; they never abort the build.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::embed::write_embedded_assets;
use crate::generator::sitemap::build_sitemap;
use crate::logger::ProgressLine;
use crate::page;
use crate::utils::path::route_to_output_path;
use crate::utils::plural::plural_s;
use crate::{debug, log};

/// Result of one site build.
pub struct BuildOutput {
    /// Routes of every rendered page, in render order.
    pub routes: Vec<String>,
}

/// Build the site and auxiliary outputs (production entry point).
pub fn build_all(config: &SiteConfig) -> Result<BuildOutput> {
    let output = build_site(config)?;
    build_sitemap(config, &output.routes)?;
    Ok(output)
}

/// Build all pages and assets into the output directory.
pub fn build_site(config: &SiteConfig) -> Result<BuildOutput> {
    let started = Instant::now();

    prepare_output(config)?;
    let store = ContentStore::load(config)?;

    let pages = page_set(&store);
    let asset_count = count_files(&config.build.assets) + project_asset_count(config, &store);
    let progress = ProgressLine::new(&[("pages", pages.len()), ("assets", asset_count)]);

    copy_static_assets(config, &progress)?;
    copy_project_assets(config, &store, &progress)?;
    write_embedded_assets(&config.build.output)?;

    // Render pages in parallel; content failures degrade to fallback
    // blocks inside the page, so every route still publishes
    let rendered: Vec<(String, String)> = pages
        .par_iter()
        .map(|spec| {
            let html = render_page(config, &store, spec);
            progress.inc("pages");
            (spec.route(), html)
        })
        .collect();

    let routes: Vec<String> = rendered.iter().map(|(route, _)| route.clone()).collect();
    for (route, html) in &rendered {
        write_page(config, route, html)?;
    }

    progress.finish();
    log!(
        "build";
        "{} page{} in {:.2?}",
        routes.len(),
        plural_s(routes.len()),
        started.elapsed()
    );

    Ok(BuildOutput { routes })
}

// =============================================================================
// Page set
// =============================================================================

/// One page to render.
enum PageSpec<'a> {
    Home,
    About,
    Resume,
    Projects,
    Detail(&'a crate::content::project::Project),
    NotFound,
}

impl PageSpec<'_> {
    fn route(&self) -> String {
        match self {
            PageSpec::Home => "/".to_string(),
            PageSpec::About => "/about/".to_string(),
            PageSpec::Resume => "/resume/".to_string(),
            PageSpec::Projects => "/projects/".to_string(),
            PageSpec::Detail(project) => project.route(),
            PageSpec::NotFound => "/404.html".to_string(),
        }
    }
}

fn page_set(store: &ContentStore) -> Vec<PageSpec<'_>> {
    let mut pages = vec![
        PageSpec::Home,
        PageSpec::About,
        PageSpec::Resume,
        PageSpec::Projects,
        PageSpec::NotFound,
    ];
    pages.extend(store.projects.iter().map(PageSpec::Detail));
    pages
}

fn render_page(config: &SiteConfig, store: &ContentStore, spec: &PageSpec<'_>) -> String {
    let html = match spec {
        PageSpec::Home => page::home::render(config, store),
        PageSpec::About => page::about::render(config, store),
        PageSpec::Resume => page::resume::render(config, store),
        PageSpec::Projects => page::projects::render(config, store),
        PageSpec::Detail(project) => page::detail::render(config, store, project),
        PageSpec::NotFound => page::error::render_not_found(config, &store.site),
    };

    if config.build.minify {
        minify_html(&html)
    } else {
        html
    }
}

fn write_page(config: &SiteConfig, route: &str, html: &str) -> Result<()> {
    let path = route_to_output_path(&config.build.output, route);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Drop blank lines and trailing whitespace from rendered HTML.
fn minify_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for line in html.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}

// =============================================================================
// Output preparation and asset copying
// =============================================================================

fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        debug!("build"; "cleaning {}", output.display());
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    Ok(())
}

/// Copy the static assets directory into `output/assets/`.
fn copy_static_assets(config: &SiteConfig, progress: &ProgressLine) -> Result<()> {
    let assets = &config.build.assets;
    if !assets.is_dir() {
        return Ok(());
    }
    copy_dir(assets, &config.build.output.join("assets"), progress)
}

/// Copy every project folder into `output/projects/<folder>/`.
fn copy_project_assets(
    config: &SiteConfig,
    store: &ContentStore,
    progress: &ProgressLine,
) -> Result<()> {
    for project in &store.projects {
        let source = ContentStore::project_dir(config, &project.entry.folder);
        let target = config
            .build
            .output
            .join("projects")
            .join(&project.entry.folder);
        copy_dir(&source, &target, progress)?;
    }
    Ok(())
}

/// Recursively copy a directory, in parallel.
fn copy_dir(source: &Path, target: &Path, progress: &ProgressLine) -> Result<()> {
    let files: Vec<_> = jwalk::WalkDir::new(source)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .collect();

    files.par_iter().try_for_each(|file| -> Result<()> {
        let relative = file.strip_prefix(source).unwrap_or(file);
        let destination = target.join(relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &destination)
            .with_context(|| format!("failed to copy {}", file.display()))?;
        progress.inc("assets");
        Ok(())
    })
}

fn count_files(dir: &Path) -> usize {
    if !dir.is_dir() {
        return 0;
    }
    jwalk::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

fn project_asset_count(config: &SiteConfig, store: &ContentStore) -> usize {
    store
        .projects
        .iter()
        .map(|p| count_files(&ContentStore::project_dir(config, &p.entry.folder)))
        .sum()
}

// =============================================================================
// Tests
// =============================================================================
