//! Build state tracking for serve mode.
//!
//! Two orthogonal states:
//! - `SERVING`: Is the site ready to serve requests? (initial build complete)
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tiny_http::Server;

/// Site is ready to serve requests (initial build complete)
/// - `false`: Show loading page
/// - `true`: Serve normally
static SERVING: AtomicBool = AtomicBool::new(false);

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// HTTP server reference for graceful shutdown
static SERVER: OnceLock<Arc<Server>> = OnceLock::new();

/// Shutdown signal sender for watcher/reload threads
static SHUTDOWN_TX: OnceLock<crossbeam::channel::Sender<()>> = OnceLock::new();

// =============================================================================
// SERVING state
// =============================================================================

/// Check if the site is ready to serve requests
pub fn is_serving() -> bool {
    SERVING.load(Ordering::SeqCst)
}

/// Mark the site as ready to serve (call after initial build completes)
pub fn set_serving() {
    SERVING.store(true, Ordering::SeqCst);
}

// =============================================================================
// SHUTDOWN state
// =============================================================================

/// Setup the global Ctrl+C handler. Call once at program start
///
/// The handler behavior depends on whether a server has been registered:
/// - Before `register_server()`: Sets SHUTDOWN flag, process exits
/// - After `register_server()`: Graceful shutdown (unblock server, notify threads)
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        // Notify watcher/reload threads
        if let Some(tx) = SHUTDOWN_TX.get() {
            let _ = tx.send(());
        }

        // Unblock HTTP server, or exit immediately if not yet serving
        if let Some(server) = SERVER.get() {
            crate::log!("serve"; "shutting down...");
            server.unblock();
        } else {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Register the HTTP server for graceful shutdown
///
/// Call this after binding the server, before entering the request loop
pub fn register_server(server: Arc<Server>, shutdown_tx: crossbeam::channel::Sender<()>) {
    let _ = SERVER.set(server);
    let _ = SHUTDOWN_TX.set(shutdown_tx);
}

/// Check if shutdown has been requested
///
/// Uses Relaxed ordering for performance - worst case is processing
/// a few more requests before stopping, which is acceptable
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

// =============================================================================
// Tests
// =============================================================================
