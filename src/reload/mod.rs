//! Live reload: file watching, rebuild, and client notification.
//!
//! The watcher thread debounces filesystem events, skips no-op writes via
//! content hashing, rebuilds, and broadcasts the outcome to connected
//! WebSocket clients. The browser client tears down carousel listeners
//! before replacing the document, so rebinding never duplicates them.

pub mod server;
pub mod watcher;

use serde::Serialize;

/// Message sent to reload clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReloadMessage {
    /// Output changed, reload the page.
    Reload,
    /// Rebuild failed; show the detail in the error overlay.
    Error { detail: String },
}
