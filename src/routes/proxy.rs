//! Same-origin forwarding of `/api/*` to the voting backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app only talks to its own origin. Session cookies set by the
//! backend therefore have to pass through untouched in both directions.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the upstream request.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [AUTHORIZATION, COOKIE, CONTENT_TYPE, ACCEPT];

/// Largest request body accepted for forwarding.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("path not forwardable: {0}")]
    Path(String),
    #[error("upstream timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("upstream unreachable: {0}")]
    Transport(reqwest::Error),
    #[error("upstream response unusable: {0}")]
    Relay(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout(err) } else { Self::Transport(err) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Body(_) | Self::Path(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Transport(_) | Self::Relay(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, %status, "api proxy failed");
        status.into_response()
    }
}

/// Upstream URL for a raw request `path` (starting with `/api/`) and an
/// optional query. Both are appended exactly as received.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

/// True when any segment of the raw `path` is `.` or `..`, literal or
/// percent-encoded. URL parsing would resolve those and escape `/api/`.
#[must_use]
pub fn has_dot_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    })
}

/// `ANY /api/{*path}`: forward to the backend and relay its answer.
///
/// The path is taken from the raw request URI, so percent-escapes reach the
/// backend untouched.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path();
    if !path.starts_with("/api/") || has_dot_segment(path) {
        return Err(ProxyError::Path(path.to_owned()));
    }
    let url = upstream_url(&state.config.upstream_api_url, path, parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut upstream = state.http.request(parts.method.clone(), &url);
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in parts.headers.get_all(name) {
            upstream = upstream.header(name, value);
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let resp = upstream.send().await?;
    let status = resp.status();
    tracing::debug!(method = %parts.method, %url, %status, "api proxied");

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = resp.headers().get(CONTENT_TYPE) {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    for cookie in resp.headers().get_all(SET_COOKIE) {
        builder = builder.header(SET_COOKIE, cookie);
    }
    let bytes = resp.bytes().await?;
    builder
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::Relay(e.to_string()))
}
