//! Resume page: degree blocks, experience, skills.
//!
//! Each degree/experience block renders inside a collapsible, expanded by
//! default; exam grids and skill tags come straight from `resume.json`.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::resume::{Degree, Experience, ResumeContent};
use crate::utils::html::{escape, escape_attr};

use super::collapsible::render_collapsible;
use super::error::render_error_block;
use super::layout::render_page;
use super::sidebar::render_sidebar;

/// Render the resume page document.
pub fn render(config: &SiteConfig, store: &ContentStore) -> String {
    let prefix = config.build.url_prefix();

    let mut body = String::new();
    body.push_str(r#"<div class="page-body">"#);
    body.push_str(&render_sidebar(&store.site, &prefix));
    body.push_str(r#"<main class="main-content">"#);

    match &store.resume {
        Some(resume) => body.push_str(&render_resume(resume)),
        None => body.push_str(&render_error_block(
            "Resume unavailable",
            "resume.json could not be loaded.",
            &prefix,
        )),
    }

    body.push_str("</main></div>");

    render_page(config, &store.site, "Resume", "/resume/", &body)
}

fn render_resume(resume: &ResumeContent) -> String {
    let mut out = String::new();

    // Education
    if !resume.degrees.is_empty() {
        out.push_str(&format!(
            r#"<section class="resume-section"><h1 class="heading-xl">{}</h1>"#,
            escape(&resume.page_text.education)
        ));
        for degree in &resume.degrees {
            out.push_str(&render_collapsible(
                &degree.title,
                &render_degree(degree),
                true,
            ));
        }
        out.push_str("</section>");
    }

    // Experience
    if let Some(experience) = &resume.experience {
        out.push_str(&format!(
            r#"<section class="resume-section"><h1 class="heading-xl">{}</h1>"#,
            escape(&resume.page_text.experience)
        ));
        out.push_str(&render_collapsible(
            &experience.position,
            &render_experience(experience),
            true,
        ));
        out.push_str("</section>");
    }

    // Skills
    if !resume.skills.is_empty() {
        out.push_str(&format!(
            r#"<section class="resume-section"><h1 class="heading-xl">{}</h1><div class="skills-container">"#,
            escape(&resume.page_text.skills)
        ));
        for category in &resume.skills {
            out.push_str(&format!(
                r#"<div class="skill-category"><h3 class="heading-md">{}</h3><div class="skill-tags">"#,
                escape(&category.title)
            ));
            for skill in &category.skills {
                out.push_str(&format!(
                    r#"<span class="skill-tag">{}</span>"#,
                    escape(skill)
                ));
            }
            out.push_str("</div></div>");
        }
        out.push_str("</div></section>");
    }

    out
}

fn render_degree(degree: &Degree) -> String {
    let mut out = String::new();

    if !degree.info.is_empty() {
        out.push_str(&format!(
            r#"<p class="degree-info">{}</p>"#,
            escape(&degree.info)
        ));
    }
    out.push_str(&render_institution(
        &degree.institution,
        degree.institution_url.as_deref(),
    ));
    if !degree.period.is_empty() || !degree.location.is_empty() {
        out.push_str(&format!(
            r#"<p class="degree-info">{} · {}</p>"#,
            escape(&degree.period),
            escape(&degree.location)
        ));
    }

    if !degree.exams.is_empty() {
        out.push_str(r#"<div class="exams-grid">"#);
        for exam in &degree.exams {
            out.push_str(r#"<div class="exam-card">"#);
            if let Some(grade) = &exam.grade {
                out.push_str(&format!(
                    r#"<span class="exam-grade">{}</span>"#,
                    escape(grade)
                ));
            }
            out.push_str(&escape(&exam.name));
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    out
}

fn render_experience(experience: &Experience) -> String {
    let mut out = String::new();

    out.push_str(&render_institution(
        &experience.company,
        experience.company_url.as_deref(),
    ));
    if !experience.period.is_empty() || !experience.location.is_empty() {
        out.push_str(&format!(
            r#"<p class="experience-info">{} · {}</p>"#,
            escape(&experience.period),
            escape(&experience.location)
        ));
    }
    if !experience.description.is_empty() {
        out.push_str(&format!(
            r#"<p class="paragraph">{}</p>"#,
            escape(&experience.description)
        ));
    }
    if !experience.responsibilities.is_empty() {
        out.push_str(r#"<ul class="experience-list">"#);
        for item in &experience.responsibilities {
            out.push_str(&format!("<li>{}</li>", escape(item)));
        }
        out.push_str("</ul>");
    }

    out
}

/// Institution/company name, linked when a URL is present.
fn render_institution(name: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-link">{}</a>"#,
            escape_attr(url),
            escape(name)
        ),
        None => format!(r#"<p class="degree-info">{}</p>"#, escape(name)),
    }
}
