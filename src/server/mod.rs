//! The static file server.
//!
//! A small blocking HTTP server over a serving root. Responses carry weak
//! ETags derived from file size and modification time, honor
//! `If-None-Match` revalidation, and split caching policy by file class
//! (see [`mime`]).

pub mod mime;
pub mod resolve;

use crate::error::{Error, Result};
use crate::request_log;
use crate::server::resolve::{resolve, Resolution};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::{Instant, UNIX_EPOCH};
use tiny_http::{Header, Request, Response, Server};

/// A bound static file server.
pub struct StaticServer {
    server: Server,
    root: PathBuf,
    request_logging: bool,
}

impl StaticServer {
    /// Bind a listener on `addr` serving files from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound.
    pub fn bind(addr: &str, root: PathBuf, request_logging: bool) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| Error::Bind(e.to_string()))?;
        Ok(Self { server, root, request_logging })
    }

    /// The bound socket address.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the process exits.
    pub fn run(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, request: Request) {
        let started = Instant::now();
        let method = request.method().to_string();
        // Fragments never reach a server in practice, but strip them along
        // with the query so the path is purely hierarchical
        let path = request
            .url()
            .split(['?', '#'])
            .next()
            .unwrap_or("/")
            .to_string();

        let status = self.respond(request, &path);

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        request_log::log_request(self.request_logging, &method, &path, status, duration_ms);
    }

    /// Produce and send the response, returning the status code sent.
    fn respond(&self, request: Request, path: &str) -> u16 {
        match resolve(&self.root, path) {
            Resolution::BadRequest => respond_text(request, 400, "Bad Request"),
            Resolution::NotFound => respond_text(request, 404, "Not Found"),
            Resolution::Forbidden => respond_text(request, 403, "Forbidden"),
            Resolution::Serve(file) => serve_file(request, &file),
        }
    }
}

/// Serve one resolved file, handling conditional revalidation.
fn serve_file(request: Request, file: &Path) -> u16 {
    let Ok(meta) = fs::metadata(file) else {
        return respond_text(request, 404, "Not Found");
    };
    let etag = weak_etag(&meta);

    let revalidated = request
        .headers()
        .iter()
        .any(|h| h.field.equiv("If-None-Match") && h.value.as_str() == etag);
    if revalidated {
        let mut response = Response::empty(304);
        if let Some(h) = header("ETag", &etag) {
            response = response.with_header(h);
        }
        let _ = request.respond(response);
        return 304;
    }

    let Ok(body) = fs::read(file) else {
        return respond_text(request, 500, "Internal Server Error");
    };

    let cache_control = if mime::is_no_cache(file) {
        "no-cache"
    } else {
        "public, max-age=3600"
    };

    let mut response = Response::from_data(body);
    for (name, value) in [
        ("Content-Type", mime::content_type(file)),
        ("ETag", etag.as_str()),
        ("Cache-Control", cache_control),
    ] {
        if let Some(h) = header(name, value) {
            response = response.with_header(h);
        }
    }
    let _ = request.respond(response);
    200
}

/// A weak validator from file size and mtime. Cheap to compute and stable
/// as long as the file is untouched.
fn weak_etag(meta: &fs::Metadata) -> String {
    let mtime_ms = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_millis());
    format!("W/\"{}-{:x}\"", meta.len(), mtime_ms)
}

fn respond_text(request: Request, status: u16, body: &str) -> u16 {
    let response = Response::from_string(body).with_status_code(status);
    let _ = request.respond(response);
    status
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}
