//! Users-location service routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    models::UserLocationView,
    state::AppState,
};

/// Create the router for the users-location service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users-location", get(get_all_users_location))
        .route("/users-location/:user_id", get(get_user_location))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-location"
    }))
}

/// Get the location view of every user
pub async fn get_all_users_location(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserLocationView>>> {
    let views = state.user_location_service.list_all_views().await?;

    Ok(Json(views))
}

/// Get the location view of one user
pub async fn get_user_location(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserLocationView>> {
    let Path(user_id) = user_id.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let view = state
        .user_location_service
        .get_view_by_id(user_id)
        .await?;

    Ok(Json(view))
}
