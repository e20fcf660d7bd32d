//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching, dispatching and access logging.

use crate::config::AppState;
use crate::handler::{contact, pages, schedule};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes, Incoming};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Where a request is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page
    Home,
    /// Contact form submission
    ContactSubmit,
    /// Non-POST access to the contact endpoint goes back home
    ContactBackHome,
    /// WhatsApp scheduling redirect
    Schedule,
    /// Liveness/readiness probes
    Health,
    /// OPTIONS preflight
    Preflight,
    NotFound,
    MethodNotAllowed,
}

/// Resolve a (method, path) pair to a route.
///
/// The contact endpoint is gated before the global OPTIONS arm: any
/// non-POST access to it answers a redirect home, never a preflight or
/// an error status.
pub fn resolve(method: &Method, path: &str) -> Route {
    match (method, path) {
        (&Method::GET | &Method::HEAD, "/") => Route::Home,
        (&Method::POST, "/contact") => Route::ContactSubmit,
        (_, "/contact") => Route::ContactBackHome,
        (&Method::GET | &Method::HEAD, "/schedule") => Route::Schedule,
        (&Method::GET | &Method::HEAD, "/healthz" | "/readyz") => Route::Health,
        (&Method::OPTIONS, _) => Route::Preflight,
        (&Method::GET | &Method::HEAD, _) => Route::NotFound,
        _ => Route::MethodNotAllowed,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // Capture request facts before the body is consumed
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");
    let is_head = method == Method::HEAD;

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Reject oversized declared bodies before touching them
    let response = match check_body_size(&req, state.config.http.max_body_size) {
        Some(resp) => resp,
        None => dispatch(req, &state, is_head).await,
    };

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_len(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch a request to its route handler
async fn dispatch(
    req: Request<Incoming>,
    state: &Arc<AppState>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match resolve(req.method(), req.uri().path()) {
        Route::Home => pages::home(state, is_head),
        Route::ContactSubmit => contact::submit(req).await,
        Route::ContactBackHome => http::build_redirect_response("/"),
        Route::Schedule => schedule::redirect(&state.config.site),
        Route::Health => http::build_health_response("ok"),
        Route::Preflight => http::build_options_response(state.config.http.enable_cors),
        Route::NotFound => http::build_404_response(),
        Route::MethodNotAllowed => {
            logger::log_warning(&format!(
                "Method not allowed: {} {}",
                req.method(),
                req.uri().path()
            ));
            http::build_405_response()
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Exact response body size, known up front for `Full` bodies
fn response_body_len(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// Short HTTP version label for access logs
fn version_label(version: Version) -> String {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string()
}

/// Copy a header value out of the request, if present and readable
fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
