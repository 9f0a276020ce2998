// src/logging_middleware.rs
//! Request logging: one line per request with the caller role, plus JSON
//! bodies at debug level.

use axum::body::to_bytes;
use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::auth::ROLE_HEADER;

/// Upper bound on buffered bodies; course payloads are small.
const MAX_LOGGED_BODY: usize = 1024 * 1024;

pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let started = Instant::now();
    let (parts, body) = request.into_parts();

    let method = parts.method.clone();
    let uri = parts.uri.clone();
    let role = parts
        .headers
        .get(ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;
    if let Some(rendered) = render_body(&bytes) {
        debug!(method = %method, uri = %uri, request_body = %rendered, "📥 Request");
    }

    let response = next
        .run(Request::from_parts(parts, Body::from(bytes)))
        .await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Some(rendered) = render_body(&bytes) {
        debug!(status = %parts.status, response_body = %rendered, "📤 Response");
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if parts.status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            role = %role,
            status = %parts.status,
            elapsed_ms,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            role = %role,
            status = %parts.status,
            elapsed_ms,
            "Request handled"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Pretty-prints JSON bodies and passes other UTF-8 through. Empty and
/// binary bodies are not logged.
fn render_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string())),
        Err(_) => Some(text.to_string()),
    }
}
