//! Authenticated-identity boundary.
//!
//! Session mechanics (passwords, OAuth, OTP) live outside this service; the
//! upstream auth layer resolves the user and forwards the id in the
//! `x-user-id` header. Handlers take `AuthUser` and never see requests
//! without a resolved identity.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser { id })
    }
}
