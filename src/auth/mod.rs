use axum::Router;

use crate::state::AppState;

pub mod cookie;
mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;
pub mod repo_types;
mod validate;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
