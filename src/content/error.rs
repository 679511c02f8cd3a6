//! Content loading error types.
//!
//! Content failures surface as readable message strings: the build logs
//! them and renders fallback pages, it never panics over a broken content
//! file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the content loading boundary.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{path}` does not exist")]
    Missing { path: PathBuf },
}

impl ContentError {
    /// The user-facing message for fallback error pages.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = ContentError::Missing {
            path: PathBuf::from("content/site.json"),
        };
        assert_eq!(err.message(), "`content/site.json` does not exist");
    }
}
