//! Development server with live reload support.

mod lifecycle;
mod path;
mod response;

use anyhow::Result;
use crossbeam::channel;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};
use tiny_http::{Request, Server};

use crate::config::{SiteConfig, cfg};
use crate::embed::serve::HOTRELOAD_JS_PATH;
use crate::{debug, log};

/// Default WebSocket port for hot reload
pub const DEFAULT_WS_PORT: u16 = 35990;

/// Actual WebSocket port (may differ from DEFAULT_WS_PORT if port was in use)
static ACTUAL_WS_PORT: AtomicU16 = AtomicU16::new(DEFAULT_WS_PORT);

/// Update the actual WebSocket port (called after the reload server binds)
pub fn set_actual_ws_port(port: u16) {
    ACTUAL_WS_PORT.store(port, Ordering::Relaxed);
}

/// Get the actual WebSocket port
fn get_actual_ws_port() -> u16 {
    ACTUAL_WS_PORT.load(Ordering::Relaxed)
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    ws_enabled: bool,
    shutdown_rx: channel::Receiver<()>,
}

/// Bind the HTTP server without starting the request loop
///
/// This lets the caller start the initial build in the background while
/// requests already get a loading page.
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let ws_enabled = config.serve.watch;
    if ws_enabled {
        debug!("serve"; "reload socket ws://localhost:{}", DEFAULT_WS_PORT);
    }

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    lifecycle::register_server_for_shutdown(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    Ok(BoundServer {
        server,
        addr,
        ws_enabled,
        shutdown_rx,
    })
}

impl BoundServer {
    /// Get the bound address.
    #[allow(dead_code)]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Receiver signalled on Ctrl+C, for the watcher thread.
    pub fn shutdown_rx(&self) -> channel::Receiver<()> {
        self.shutdown_rx.clone()
    }

    /// Start the request loop (blocking until shutdown).
    pub fn run(self) -> Result<()> {
        run_request_loop(&self.server, self.ws_enabled);
        Ok(())
    }
}

fn run_request_loop(server: &Server, ws_enabled: bool) {
    // Thread pool so one slow file read never blocks other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let config = cfg();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, ws_enabled) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, ws_enabled: bool) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let ws_port = ws_enabled.then(get_actual_ws_port);

    // Serve the reload client from memory (doesn't depend on the build)
    if let Some(port) = ws_port
        && request.url() == HOTRELOAD_JS_PATH
    {
        return response::respond_hotreload_js(request, port);
    }

    if !crate::core::is_serving() {
        return response::respond_loading(request);
    }

    if let Some(path) = path::resolve_path(request.url(), &config.build.output) {
        return response::respond_file(request, &path, ws_port);
    }

    response::respond_not_found(request, config, ws_port)
}
