//! HTTP response handlers.

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::config::SiteConfig;

/// Respond with a static file, optionally injecting the reload client.
pub fn respond_file(request: Request, path: &Path, ws_port: Option<u16>) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let body = maybe_inject_hotreload(body, content_type, ws_port);

    send_body(request, 200, content_type, body)
}

/// Respond with 404 page (custom or default).
pub fn respond_not_found(
    request: Request,
    config: &SiteConfig,
    ws_port: Option<u16>,
) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let custom_404 = config.build.output.join("404.html");
    let has_custom = custom_404.is_file();

    if is_head_request(&request) {
        let mime = if has_custom { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_custom
        && let Ok(body) = fs::read(&custom_404)
    {
        let body = maybe_inject_hotreload(body, HTML, ws_port);
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with loading page (build not ready).
pub fn respond_loading(request: Request) -> Result<()> {
    use crate::utils::mime::types::HTML;
    let response = Response::from_string(crate::embed::serve::LOADING_HTML)
        .with_header(make_header("Content-Type", HTML));
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    use crate::utils::mime::types::PLAIN;
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with hotreload.js from memory.
pub fn respond_hotreload_js(request: Request, ws_port: u16) -> Result<()> {
    use crate::embed::serve::{HOTRELOAD_JS, HotreloadVars};
    use crate::utils::mime::types::JAVASCRIPT;

    let body = HOTRELOAD_JS.render(&HotreloadVars { ws_port });
    send_body(request, 200, JAVASCRIPT, body.into_bytes())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("X-Folio-Ready", "true"));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("X-Folio-Ready", "true"));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is valid")
}

// =============================================================================
// Hotreload injection
// =============================================================================

/// Maybe inject the reload client if content is HTML and watch is on.
pub fn maybe_inject_hotreload(body: Vec<u8>, content_type: &str, ws_port: Option<u16>) -> Vec<u8> {
    match (content_type.starts_with("text/html"), ws_port) {
        (true, Some(_)) => inject_hotreload_script(&body),
        _ => body,
    }
}

/// Inject the reload client script tag before `</body>`.
fn inject_hotreload_script(content: &[u8]) -> Vec<u8> {
    let script = crate::embed::serve::hotreload_tag();
    let script_bytes = script.as_bytes();

    const PATTERN: &[u8] = b"</body>";

    // Reverse search for </body> using byte windows
    if let Some(pos) = content
        .windows(PATTERN.len())
        .rposition(|w| w.eq_ignore_ascii_case(PATTERN))
    {
        let mut result = Vec::with_capacity(content.len() + script_bytes.len());
        result.extend_from_slice(&content[..pos]);
        result.extend_from_slice(script_bytes);
        result.extend_from_slice(&content[pos..]);
        return result;
    }

    // No </body> found, append to end (browsers handle this gracefully)
    let mut result = Vec::with_capacity(content.len() + script_bytes.len());
    result.extend_from_slice(content);
    result.extend_from_slice(script_bytes);
    result
}
