//! Server binding and shutdown wiring.

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tiny_http::Server;

use crate::debug;

/// Maximum port retry attempts when the configured port is taken.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind the HTTP server, retrying on adjacent ports if the configured
/// one is in use.
pub fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);
        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    debug!("serve"; "port {} in use, bound {}", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => {
                last_error = Some(e);
            }
        }
    }

    Err(anyhow::anyhow!(
        "failed to bind HTTP server after {} attempts: {}",
        MAX_PORT_RETRIES,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
    .context("is another folio serve running?")
}

/// Register the server for Ctrl+C graceful shutdown.
pub fn register_server_for_shutdown(
    server: Arc<Server>,
    shutdown_tx: crossbeam::channel::Sender<()>,
) {
    crate::core::register_server(server, shutdown_tx);
}
