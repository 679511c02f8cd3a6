//! MIME type detection for the development server.

#![allow(dead_code)]

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    // Text
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";

    // Documents
    pub const PDF: &str = "application/pdf";

    // Binary
    pub const OCTET_STREAM: &str = "application/octet-stream";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";

    // Video (project demo clips)
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
}

/// Guess MIME type from file extension.
///
/// Returns a full MIME type string suitable for HTTP Content-Type header.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs" | "cjs") => types::JAVASCRIPT,
        Some("json") => types::JSON,
        Some("xml") => types::XML,
        Some("txt") => types::PLAIN,

        Some("svg") => types::SVG,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("avif") => types::AVIF,
        Some("ico") => types::ICO,

        Some("mp4" | "m4v") => types::MP4,
        Some("webm") => types::WEBM,

        Some("woff") => types::WOFF,
        Some("woff2") => types::WOFF2,
        Some("ttf") => types::TTF,
        Some("otf") => types::OTF,

        Some("pdf") => types::PDF,

        _ => types::OCTET_STREAM,
    }
}

/// Check if the MIME type represents text content.
pub fn is_text(mime: &str) -> bool {
    mime.starts_with("text/") || mime == types::JSON || mime == types::XML
}

/// Check if the MIME type represents an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}
