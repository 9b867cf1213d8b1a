use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::AppError;

/// Raw access token taken from the `authorization` header. Whether it names a
/// live session is decided by the question service, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_token)
            .map(Self)
            .ok_or(AppError::Unauthenticated)
    }
}

pub fn parse_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let token = trimmed.strip_prefix("Bearer ").unwrap_or(trimmed).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
