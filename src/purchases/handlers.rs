use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    purchases::{
        dto::PurchasesResponse,
        repo_types::{Course, Purchase},
    },
    state::AppState,
};

pub fn purchase_routes() -> Router<AppState> {
    Router::new().route("/user/purchases", get(purchases))
}

#[instrument(skip(state))]
pub async fn purchases(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PurchasesResponse>, ApiError> {
    let purchased = Purchase::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| ApiError::internal("purchases", e))?;

    let course_ids: Vec<Uuid> = purchased.iter().map(|p| p.course_id).collect();
    let courses = Course::find_by_ids(&state.db, &course_ids)
        .await
        .map_err(|e| ApiError::internal("purchases", e))?;

    Ok(Json(PurchasesResponse {
        purchases: purchased,
        courses,
    }))
}
