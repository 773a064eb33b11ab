use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        cookie::{clear_session_cookie, session_cookie},
        dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
        validate::validate_signup,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user/logout", get(logout))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let violations = validate_signup(&payload);
    if !violations.is_empty() {
        warn!(count = violations.len(), "signup validation failed");
        return Err(ApiError::Validation(violations));
    }

    // Ensure email is not taken
    if User::find_by_email(&state.db, &payload.email)
        .await
        .map_err(|e| ApiError::internal("signup", e))?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let hash = hash_password(&payload.password).map_err(|e| ApiError::internal("signup", e))?;

    let user = User::create(
        &state.db,
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &hash,
    )
    .await
    .map_err(|e| ApiError::internal("signup", e))?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup succeeded".to_string(),
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let user = User::find_by_email(&state.db, &payload.email)
        .await
        .map_err(|e| ApiError::internal("login", e))?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            // Same message as a wrong password; do not reveal which one it was.
            ApiError::Auth("Invalid credentials".to_string())
        })?;

    if payload.password.is_empty() {
        return Err(ApiError::BadRequest("Password is required".to_string()));
    }

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::internal("login", e))?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Auth("Invalid credentials".to_string()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| ApiError::internal("login", e))?;

    let mut headers = HeaderMap::new();
    let cookie = session_cookie(&token, keys.session_ttl, state.config.production)
        .map_err(|e| ApiError::internal("login", e))?;
    headers.insert(SET_COOKIE, cookie);

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((
        headers,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user: user.into(),
            token,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
) -> Result<(HeaderMap, Json<MessageResponse>), ApiError> {
    // No authentication required; clearing an absent cookie is still a success.
    let mut headers = HeaderMap::new();
    let cookie =
        clear_session_cookie(state.config.production).map_err(|e| ApiError::internal("logout", e))?;
    headers.insert(SET_COOKIE, cookie);

    Ok((
        headers,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
