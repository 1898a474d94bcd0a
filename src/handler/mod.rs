//! Request handler module
//!
//! Entry point for HTTP request processing. Every request resolves against
//! the build directory; the method is deliberately not inspected, matching
//! the original deployment where the asset host only ever sees GETs.

pub mod assets;

use crate::config::Config;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    cfg: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = assets::serve(&path, &cfg).await;

    if cfg.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method, path);
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(
            response.body().size_hint().exact().unwrap_or(0),
        )
        .unwrap_or(usize::MAX);
        entry.referer = referer;
        entry.user_agent = user_agent;
        logger::log_access(&entry, &cfg.access_log_format);
    }

    Ok(response)
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
