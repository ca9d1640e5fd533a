//! HTTP scale service.
//!
//! This module provides a minimal JSON-over-HTTP query interface for scale
//! generation. A single route is exposed:
//!
//! - `GET /scales?key=C&type=major` — compute a scale and return
//!   `{"tonic": "C", "scaleNotes": [...]}` with status 200; for
//!   `type=blues` the response also carries `"blueNote"`.
//!
//! Missing or invalid parameters produce status 400 with
//! `{"error": "..."}`; unknown paths 404; non-GET methods on `/scales` 405.
//! Sharp keys travel percent-encoded: `/scales?key=C%23&type=blues` (a bare
//! `#` would start the URL fragment and never reach the server).

mod handler;
mod query;
mod types;

#[cfg(test)]
mod tests;

use anyhow::Result;
use std::net::SocketAddr;
use std::process::ExitCode;

use tiny_http::{Header, Response, Server};

pub use handler::handle;
pub use types::{ErrorBody, Reply};

/// Default port for the HTTP scale service.
pub const DEFAULT_PORT: u16 = 9123;

/// Run the HTTP scale service.
///
/// # Arguments
/// * `port` - Port to listen on (bound on 127.0.0.1)
///
/// # Returns
/// Exit code: 0 on clean shutdown, 1 on error
pub fn run(port: u16) -> Result<ExitCode> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("failed to bind to {}: {}", addr, e))?;

    eprintln!("Scale service listening on http://{}", addr);
    eprintln!("Press Ctrl+C to shutdown");

    for request in server.incoming_requests() {
        let reply = handler::handle(request.method(), request.url());
        eprintln!("{} {} -> {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
            response = response.with_header(header);
        }
        if let Err(e) = request.respond(response) {
            eprintln!("Respond error: {}", e);
        }
    }

    Ok(ExitCode::SUCCESS)
}
