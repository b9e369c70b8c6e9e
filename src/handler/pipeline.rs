//! Request pipeline module
//!
//! Entry point for HTTP request processing. The interceptor is consulted
//! before method validation or any page rendering, so static-asset misses
//! never pay for the heavier host path.

use crate::config::AppState;
use crate::handler::fallback;
use crate::http;
use crate::intercept::{self, Outcome};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context for the pass-through (normal host) path
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub enable_cors: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.as_str().to_owned(),
        uri.path().to_owned(),
    );
    entry.query = uri.query().map(ToOwned::to_owned);
    entry.http_version = version_str(req.version()).to_owned();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    // 1. Interceptor first. Requests without a path-and-query (e.g. CONNECT)
    // carry nothing to inspect and fall through untouched.
    let outcome = match uri.path_and_query() {
        Some(pq) => intercept::evaluate(pq.as_str(), &state.intercept),
        None => Outcome::Passthrough,
    };

    // 2. Either answer immediately or run normal host processing
    let response = match outcome {
        Outcome::Intercepted { status, body } => {
            entry.intercepted = true;
            http::build_intercept_response(status, body, is_head)
        }
        Outcome::Passthrough => {
            let ctx = RequestContext {
                path: uri.path(),
                is_head,
                enable_cors: state.config.http.enable_cors,
            };
            fallback::render(&ctx, method)
        }
    };

    // 3. Access log
    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Extract a header as an owned string, if present and valid UTF-8
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Render an HTTP version for the access log
fn version_str(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
