//! Content file loading boundary.
//!
//! Returns parsed JSON or raw text; read and parse failures surface as
//! typed errors carrying the offending path, never as panics.

use super::error::ContentError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load and parse a JSON content file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    if !path.is_file() {
        return Err(ContentError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a raw text content file (HTML write-ups).
pub fn load_text(path: &Path) -> Result<String, ContentError> {
    if !path.is_file() {
        return Err(ContentError::Missing {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(serde::Deserialize, Debug)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(br#"{"name": "demo"}"#).unwrap();

        let sample: Sample = load_json(file.path()).unwrap();
        assert_eq!(sample.name, "demo");
    }

    #[test]
    fn test_load_json_missing() {
        let err = load_json::<Sample>(Path::new("/nonexistent.json")).unwrap_err();
        assert!(matches!(err, ContentError::Missing { .. }));
        assert!(err.message().contains("does not exist"));
    }

    #[test]
    fn test_load_json_malformed() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(b"{not json").unwrap();

        let err = load_json::<Sample>(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
    }

    #[test]
    fn test_load_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>hi</p>").unwrap();
        assert_eq!(load_text(file.path()).unwrap(), "<p>hi</p>");
    }
}
