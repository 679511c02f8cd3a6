//! File watcher driving rebuilds in serve mode.
//!
//! Events are debounced through a channel; a rebuild only runs when a
//! changed file's blake3 hash actually differs from the last build's
//! (editors love writing files without changing them). Config changes
//! reload `folio.toml` first, then rebuild.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossbeam::channel::{self, Receiver};
use notify::{RecursiveMode, Watcher};
use rustc_hash::FxHashMap;

use super::ReloadMessage;
use super::server::broadcast;
use crate::config::{cfg, reload_config};
use crate::logger::{status_error, status_success, status_unchanged};
use crate::utils::hash::{ContentHash, hash_file};
use crate::{debug, log};

/// Quiet window after the first event before a rebuild starts.
const DEBOUNCE: Duration = Duration::from_millis(150);

/// Start the watcher thread.
///
/// Watches the content directory, the static assets directory, and
/// `folio.toml`. Returns once the watcher is installed; the thread runs
/// until `shutdown_rx` fires.
pub fn start_watcher(shutdown_rx: Receiver<()>) -> Result<()> {
    let config = cfg();

    let (event_tx, event_rx) = channel::unbounded::<Vec<PathBuf>>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res
            && !event.paths.is_empty()
        {
            let _ = event_tx.send(event.paths);
        }
    })?;

    watcher.watch(&config.build.content, RecursiveMode::Recursive)?;
    if config.build.assets.is_dir() {
        watcher.watch(&config.build.assets, RecursiveMode::Recursive)?;
    }
    watcher.watch(&config.config_path, RecursiveMode::NonRecursive)?;

    log!("watch"; "watching {}", config.root_relative(&config.build.content).display());

    std::thread::spawn(move || {
        // Watcher moves into the thread so it outlives this function
        let _watcher = watcher;
        let mut hashes: FxHashMap<PathBuf, ContentHash> = FxHashMap::default();

        loop {
            crossbeam::select! {
                recv(event_rx) -> paths => {
                    let Ok(mut changed) = paths else { break };
                    // Debounce: drain the burst that editors produce
                    while let Ok(more) = event_rx.recv_timeout(DEBOUNCE) {
                        changed.extend(more);
                    }
                    handle_change(&changed, &mut hashes);
                }
                recv(shutdown_rx) -> _ => {
                    debug!("watch"; "shutting down");
                    break;
                }
            }
        }
    });

    Ok(())
}

/// React to a debounced batch of changed paths.
fn handle_change(changed: &[PathBuf], hashes: &mut FxHashMap<PathBuf, ContentHash>) {
    let config = cfg();

    // Config first: a folio.toml edit may change what gets built
    let config_changed = changed.iter().any(|p| *p == config.config_path);
    if config_changed {
        match reload_config() {
            Ok(true) => log!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                status_error("config reload failed", &format!("{e:#}"));
                broadcast(&ReloadMessage::Error {
                    detail: format!("{e:#}"),
                });
                return;
            }
        }
    }

    if !config_changed && !any_content_changed(changed, hashes) {
        status_unchanged("no content changes");
        return;
    }

    rebuild(changed);
}

/// Hash-compare the changed files against the previous build.
fn any_content_changed(
    changed: &[PathBuf],
    hashes: &mut FxHashMap<PathBuf, ContentHash>,
) -> bool {
    let mut any = false;
    for path in changed {
        if path.is_dir() {
            continue;
        }
        let new_hash = hash_file(path);
        match hashes.insert(path.clone(), new_hash) {
            Some(old) if old == new_hash => {}
            _ => any = true,
        }
    }
    any
}

fn rebuild(changed: &[PathBuf]) {
    let config = cfg();
    let display = changed
        .first()
        .map(|p| config.root_relative(p).display().to_string())
        .unwrap_or_default();

    match crate::cli::build::build_site(&config) {
        Ok(output) => {
            status_success(&format!(
                "rebuilt {} ({} pages)",
                display,
                output.routes.len()
            ));
            broadcast(&ReloadMessage::Reload);
        }
        Err(e) => {
            status_error("rebuild failed", &format!("{e:#}"));
            broadcast(&ReloadMessage::Error {
                detail: format!("{e:#}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unchanged_content_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.json");
        fs::write(&file, "{}").unwrap();

        let mut hashes = FxHashMap::default();
        let changed = vec![file.clone()];

        // First sighting counts as a change
        assert!(any_content_changed(&changed, &mut hashes));
        // Same content again does not
        assert!(!any_content_changed(&changed, &mut hashes));

        fs::write(&file, r#"{"x": 1}"#).unwrap();
        assert!(any_content_changed(&changed, &mut hashes));
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut hashes = FxHashMap::default();
        assert!(!any_content_changed(
            &[dir.path().to_path_buf()],
            &mut hashes
        ));
    }
}
