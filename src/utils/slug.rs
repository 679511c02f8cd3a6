//! URL slugification.

use deunicode::deunicode;

/// Slugify a string for use as a URL path segment.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single dash.
pub fn slugify(s: &str) -> String {
    let ascii = deunicode(s);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Check that a string is already a valid slug.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty() && s == slugify(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Data Mining 1"), "data-mining-1");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("C++ & Rust!"), "c-rust");
        assert_eq!(slugify("decision_support_system"), "decision-support-system");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Déjà Vu"), "deja-vu");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("bachelor-thesis"));
        assert!(!is_valid_slug("Bachelor Thesis"));
        assert!(!is_valid_slug(""));
    }
}
