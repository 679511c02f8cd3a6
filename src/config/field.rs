//! Config field paths for diagnostics.

use std::borrow::Cow;
use std::fmt;

/// A dotted path into `folio.toml` (e.g. `serve.port`).
///
/// Used by [`super::ConfigDiagnostics`] so every validation message can
/// point at the exact field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn owned(path: String) -> Self {
        Self(Cow::Owned(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
