//! Collapsible section rendering.
//!
//! Collapsibles render as `<details>`/`<summary>`, so expansion state is
//! native browser behavior and re-rendering a page resets nothing it
//! shouldn't. The renderer takes a title/body pair and a default-expanded
//! flag; nesting is the caller's concern.

use crate::utils::html::escape;

/// Render one collapsible section.
pub fn render_collapsible(title: &str, body_html: &str, default_open: bool) -> String {
    format!(
        r#"<details class="collapsible-section"{}><summary class="heading-lg">{}</summary><div class="collapsible-body">{}</div></details>"#,
        if default_open { " open" } else { "" },
        escape(title),
        body_html,
    )
}
