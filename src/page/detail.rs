//! Project detail page.
//!
//! The write-up pipeline: load the HTML, rewrite relative image sources
//! to the project's asset route, expand carousels on the parsed tree,
//! sectionize, then render sections as collapsibles. The sidebar carries
//! collaborator/repository/notes capsules, PDF overlay capsules, and the
//! keyword groups.

use crate::carousel::expand_carousels;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::load::load_text;
use crate::content::project::{
    Project, category_label, collaborator_label, repository_label,
};
use crate::dom::Node;
use crate::dom::parse::parse_fragment;
use crate::log;
use crate::sectionize::sectionize_nodes;
use crate::utils::html::escape;

use super::capsule::{link_capsule, pdf_capsule};
use super::collapsible::render_collapsible;
use super::error::render_error_block;
use super::icons;
use super::layout::render_page;

/// Render one project's detail document.
pub fn render(config: &SiteConfig, store: &ContentStore, project: &Project) -> String {
    let prefix = config.build.url_prefix();

    let mut body = String::new();
    body.push_str(r#"<div class="page-body"><div class="project-main">"#);
    body.push_str(&format!(
        r#"<h1 class="heading-xl">{}</h1>"#,
        escape(&project.data.name)
    ));

    if !project.data.summary.is_empty() {
        body.push_str(&format!(
            r#"<div class="project-intro"><p class="paragraph">{}</p></div>"#,
            escape(&project.data.summary)
        ));
    }

    body.push_str(&render_write_up(config, project, &prefix));
    body.push_str("</div>");
    body.push_str(&render_project_sidebar(project, &prefix));
    body.push_str("</div>");

    render_page(config, &store.site, &project.data.name, &project.route(), &body)
}

/// Load and render the write-up, or a fallback error block.
fn render_write_up(config: &SiteConfig, project: &Project, prefix: &str) -> String {
    let Some(write_up) = &project.entry.write_up else {
        // No write-up declared: the page renders without sections
        return String::new();
    };

    let path = ContentStore::project_dir(config, &project.entry.folder).join(write_up);
    let html = match load_text(&path) {
        Ok(html) => html,
        Err(err) => {
            log!("content"; "project `{}`: {}", project.entry.slug, err.message());
            return render_error_block(
                "Error Loading Project",
                &format!(
                    "{}. Please check that the project files exist.",
                    err.message()
                ),
                prefix,
            );
        }
    };

    let mut nodes = parse_fragment(&html);
    rewrite_image_sources(&mut nodes, project, prefix);
    expand_carousels(&mut nodes);
    let sectioned = sectionize_nodes(nodes);

    let mut out = String::new();
    if !sectioned.intro_content.is_empty() {
        out.push_str(r#"<div class="intro-content">"#);
        out.push_str(&sectioned.intro_content.concat());
        out.push_str("</div>");
    }
    for (index, section) in sectioned.sections.iter().enumerate() {
        let mut section_body = section.content.concat();
        for subsection in &section.subsections {
            section_body.push_str(&render_collapsible(
                &subsection.title,
                &subsection.content.concat(),
                false,
            ));
        }
        out.push_str(&render_collapsible(&section.title, &section_body, index == 0));
    }
    out
}

/// Point relative image sources at the project's published asset folder.
///
/// Absolute URLs, site-root paths, and data URIs are left alone.
fn rewrite_image_sources(nodes: &mut [Node], project: &Project, prefix: &str) {
    for node in nodes {
        let Node::Element(el) = node else { continue };

        if el.is_tag("img")
            && let Some(src) = el.get_attr("src").map(str::to_string)
            && !src.starts_with("http")
            && !src.starts_with('/')
            && !src.starts_with("data:")
        {
            el.set_attr("src", project.asset_url(prefix, &src));
        }

        rewrite_image_sources(&mut el.children, project, prefix);
    }
}

// =============================================================================
// Sidebar
// =============================================================================

fn render_project_sidebar(project: &Project, prefix: &str) -> String {
    let data = &project.data;
    let entry = &project.entry;

    let mut out = String::new();
    out.push_str(r#"<aside class="project-sidebar">"#);

    if !data.collaborators.is_empty() {
        out.push_str(&sidebar_section(
            "Collaborators",
            &data
                .collaborators
                .iter()
                .map(|url| link_capsule(&collaborator_label(url), url, icons::PERSON))
                .collect::<String>(),
        ));
    }

    if let Some(repository) = &data.repository {
        out.push_str(&sidebar_section(
            "Repository",
            &link_capsule(&repository_label(repository), repository, icons::CODE),
        ));
    }

    if let Some(live_url) = &data.live_url {
        out.push_str(&sidebar_section(
            "Live Version",
            &link_capsule("Open Live Version", live_url, icons::LINK),
        ));
    }

    if let Some(notes_url) = &data.notes_url {
        out.push_str(&sidebar_section(
            "Class Notes",
            &link_capsule("View Notes", notes_url, icons::FILE),
        ));
    }

    if let Some(report) = &entry.pdfs.report {
        out.push_str(&sidebar_section(
            "Report",
            &pdf_capsule("View Report", &project.asset_url(prefix, report), "Report"),
        ));
    }

    if let Some(slides) = &entry.pdfs.slides {
        out.push_str(&sidebar_section(
            "Slides",
            &pdf_capsule("View Slides", &project.asset_url(prefix, slides), "Slides"),
        ));
    }

    if !data.keywords.is_empty() {
        let mut groups = String::new();
        for (category, keywords) in data.keywords.iter() {
            groups.push_str(&format!(
                r#"<div class="keyword-group"><h3 class="heading-md">{}</h3><div class="keyword-tags">"#,
                escape(&category_label(category))
            ));
            for keyword in keywords {
                groups.push_str(&format!(
                    r#"<span class="skill-tag">{}</span>"#,
                    escape(keyword)
                ));
            }
            groups.push_str("</div></div>");
        }
        out.push_str(&sidebar_section("Keywords", &groups));
    }

    out.push_str("</aside>");
    out
}

fn sidebar_section(title: &str, items: &str) -> String {
    format!(
        r#"<div class="project-sidebar-section"><h3 class="heading-md">{}</h3><div class="sidebar-items">{}</div></div>"#,
        escape(title),
        items,
    )
}

// =============================================================================
// Tests
// =============================================================================
