use axum::{extract::FromRequestParts, http::request::Parts};

use crate::presentation::http::error::AppError;

/// Header carrying the caller's username, set by the authenticating proxy.
pub const USER_HEADER: &str = "x-user";

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|username| !username.is_empty())
            .map(|username| CurrentUser(username.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}
