//! Project list page: search box, category chips, card grid.
//!
//! Filtering happens client-side over `data-search`/`data-categories`
//! attributes; the page renders the full registry.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::project::{Project, category_label};
use crate::utils::html::{escape, escape_attr};

use super::layout::render_page;

/// Render the project list document.
pub fn render(config: &SiteConfig, store: &ContentStore) -> String {
    let prefix = config.build.url_prefix();

    let mut body = String::new();
    body.push_str(r#"<div class="page-body"><main class="main-content">"#);
    body.push_str(r#"<h1 class="heading-xl">Projects</h1>"#);

    if store.projects.is_empty() {
        body.push_str(r#"<div class="empty-state"><p>No projects yet.</p></div>"#);
    } else {
        body.push_str(&render_controls(store));
        body.push_str(r#"<div class="project-grid">"#);
        for project in &store.projects {
            body.push_str(&render_card(project, &prefix));
        }
        body.push_str("</div>");
        // Shown by the filter script when nothing matches
        body.push_str(r#"<div class="empty-state hidden"><p>No projects match your search.</p></div>"#);
    }

    body.push_str("</main></div>");

    render_page(config, &store.site, "Projects", "/projects/", &body)
}

fn render_controls(store: &ContentStore) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="project-controls">"#);
    out.push_str(
        r#"<input class="project-search" type="search" placeholder="Search projects…" aria-label="Search projects">"#,
    );
    out.push_str(r#"<button class="category-chip active" type="button" data-category="all">All</button>"#);
    for category in store.all_categories() {
        out.push_str(&format!(
            r#"<button class="category-chip" type="button" data-category="{}">{}</button>"#,
            escape_attr(&category),
            escape(&category_label(&category))
        ));
    }
    out.push_str("</div>");
    out
}

fn render_card(project: &Project, prefix: &str) -> String {
    let entry = &project.entry;
    let data = &project.data;

    let search_blob = format!(
        "{} {} {}",
        data.name,
        data.summary,
        entry.categories.join(" ")
    )
    .to_lowercase();

    let mut out = String::new();
    out.push_str(&format!(
        r#"<a class="project-card" href="{prefix}{}" data-search="{}" data-categories="{}">"#,
        escape_attr(&project.route()),
        escape_attr(&search_blob),
        escape_attr(&entry.categories.join(" ")),
    ));
    out.push_str(&format!(
        r#"<h2 class="card-title">{}</h2>"#,
        escape(&data.name)
    ));
    if !data.summary.is_empty() {
        out.push_str(&format!(
            r#"<p class="card-summary">{}</p>"#,
            escape(&data.summary)
        ));
    }
    if !entry.categories.is_empty() {
        out.push_str(r#"<div class="card-categories">"#);
        for category in &entry.categories {
            out.push_str(&format!("<span>{}</span>", escape(&category_label(category))));
        }
        out.push_str("</div>");
    }
    out.push_str("</a>");
    out
}
