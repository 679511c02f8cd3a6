//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve URL to filesystem path, handling index.html for directories
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    // This prevents traversal via symlinks or encoded sequences
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        // Path escapes serve_root - reject
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_file_and_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("projects/demo")).unwrap();
        fs::write(dir.path().join("index.html"), "root").unwrap();
        fs::write(dir.path().join("projects/demo/index.html"), "demo").unwrap();

        let root_index = resolve_path("/", dir.path()).unwrap();
        assert!(root_index.ends_with("index.html"));

        let demo = resolve_path("/projects/demo/", dir.path()).unwrap();
        assert!(demo.ends_with("projects/demo/index.html"));

        // Directory form without trailing slash also resolves
        assert!(resolve_path("/projects/demo", dir.path()).is_some());
    }

    #[test]
    fn test_resolve_percent_decoding() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a b.html"), "x").unwrap();
        assert!(resolve_path("/a%20b.html", dir.path()).is_some());
    }

    #[test]
    fn test_resolve_strips_query() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "x").unwrap();
        assert!(resolve_path("/?reload=1", dir.path()).is_some());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "x").unwrap();
        assert!(resolve_path("/../etc/passwd", dir.path()).is_none());
        assert!(resolve_path("/%2e%2e/etc/passwd", dir.path()).is_none());
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_path("/nope.html", dir.path()).is_none());
    }
}
