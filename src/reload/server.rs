//! WebSocket server for live reload.
//!
//! Accepts browser connections on a side port and broadcasts rebuild
//! outcomes. Dead clients are dropped on the next broadcast.

use std::net::{TcpListener, TcpStream};
use std::sync::LazyLock;

use anyhow::Result;
use parking_lot::Mutex;
use tungstenite::{Message, WebSocket};

use super::ReloadMessage;
use crate::{debug, log};

/// Maximum port retry attempts
const MAX_PORT_RETRIES: u16 = 10;

/// Connected reload clients.
static CLIENTS: LazyLock<Mutex<Vec<WebSocket<TcpStream>>>> =
    LazyLock::new(|| Mutex::new(Vec::new()));

/// Start the WebSocket accept loop. Returns the actually bound port.
pub fn start_ws_server(base_port: u16) -> Result<u16> {
    let (listener, actual_port) = try_bind_port(base_port, MAX_PORT_RETRIES)?;

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => match tungstenite::accept(stream) {
                    Ok(socket) => {
                        debug!("reload"; "client connected");
                        CLIENTS.lock().push(socket);
                    }
                    Err(e) => {
                        debug!("reload"; "handshake failed: {}", e);
                    }
                },
                Err(e) => {
                    log!("reload"; "accept error: {}", e);
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
        }
    });

    Ok(actual_port)
}

/// Send a message to every connected client, dropping dead ones.
pub fn broadcast(message: &ReloadMessage) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(_) => return,
    };

    let mut clients = CLIENTS.lock();
    clients.retain_mut(|client| client.send(Message::text(json.clone())).is_ok());
}

/// Try binding to port, retry with incremented port if in use
fn try_bind_port(base_port: u16, max_retries: u16) -> Result<(TcpListener, u16)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        match TcpListener::bind(format!("127.0.0.1:{}", port)) {
            Ok(listener) => {
                let actual_port = listener.local_addr()?.port();
                return Ok((listener, actual_port));
            }
            Err(e) => {
                last_error = Some(e);
                continue;
            }
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind WebSocket server after {} attempts: {}",
        max_retries,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_retries_taken_port() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        // Base port is occupied, so binding retries upward
        let (listener, actual) = try_bind_port(port, MAX_PORT_RETRIES).unwrap();
        assert_ne!(actual, port);
        drop(listener);
    }

    #[test]
    fn test_broadcast_without_clients_is_noop() {
        broadcast(&ReloadMessage::Reload);
    }
}
