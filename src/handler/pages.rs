//! Landing page handler

use crate::config::AppState;
use crate::http;
use crate::render;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Handle GET / by rendering the landing page from the content store
pub fn home(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let html = render::render_home(&state.content);
    http::build_html_response(html, is_head)
}
