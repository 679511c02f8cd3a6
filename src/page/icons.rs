//! Inline SVG icons for capsules and section headers.
//!
//! Simple 16px stroke icons, decorative only (aria-hidden).

/// Wrap raw icon paths in a sized svg element.
macro_rules! icon {
    ($body:literal) => {
        concat!(
            r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
            $body,
            "</svg>"
        )
    };
}

/// Chain link.
pub const LINK: &str = icon!(
    r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#
);

/// Envelope.
pub const MAIL: &str = icon!(
    r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#
);

/// Handset.
pub const PHONE: &str = icon!(
    r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#
);

/// Document sheet.
pub const FILE: &str = icon!(
    r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/>"#
);

/// Person silhouette.
pub const PERSON: &str = icon!(
    r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
);

/// Angle brackets.
pub const CODE: &str = icon!(r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#);
