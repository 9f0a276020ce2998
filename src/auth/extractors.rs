//! Caller context extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

use crate::common::{ApiError, AppState, Locale};

pub const ROLE_HEADER: &str = "x-role";

/// Raw role token from the `X-Role` header.
///
/// The token is kept as sent (absent, empty or misspelled included); the
/// policy resolver decides what it means.
#[derive(Debug, Clone, Default)]
pub struct CallerRole(pub Option<String>);

impl CallerRole {
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerRole
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        debug!(role = ?token, "Caller role extracted");
        Ok(CallerRole(token))
    }
}

/// Locale used to render failure messages, from `Accept-Language` with the
/// configured default as fallback.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

#[async_trait]
impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<Arc<AppState>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let locale = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|h| h.to_str().ok())
            .and_then(Locale::from_tag)
            .unwrap_or(app_state.default_locale);

        Ok(RequestLocale(locale))
    }
}
