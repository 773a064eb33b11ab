use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, header::COOKIE, request::Parts},
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::cookie::SESSION_COOKIE_NAME;
use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts and verifies the session token, yielding the account ID.
/// Accepts a bearer header or the session cookie.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| ApiError::Auth("Missing authentication token".to_string()))?;

        // Expired, malformed and wrong-signature tokens all fail the same way.
        let claims = keys.verify(&token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Auth("Invalid or expired token".to_string())
        })?;

        Ok(AuthUser(claims.sub))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(COOKIE)?.to_str().ok()?;
    for pair in value.split(';') {
        let mut kv = pair.trim().splitn(2, '=');
        let key = kv.next()?.trim();
        let val = kv.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}
