use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;

pub const SESSION_COOKIE_NAME: &str = "jwt";

/// Build the `Set-Cookie` value carrying a fresh session token. `Secure` is
/// appended only for production-designated deployments.
pub fn session_cookie(
    token: &str,
    max_age: std::time::Duration,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = max_age.as_secs();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}
