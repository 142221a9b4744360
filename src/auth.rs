use crate::errors::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

pub const OWNER_HEADER: &str = "x-user-id";

/// Authenticated owner id, supplied by the session layer in front of us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(OWNER_HEADER)
            .ok_or_else(|| AppError::unauthorized("authentication required"))?;
        raw.to_str()
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|&id| id > 0)
            .map(Owner)
            .ok_or_else(|| AppError::unauthorized("invalid user id"))
    }
}
