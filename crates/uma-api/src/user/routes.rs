use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uma_store::User;

use crate::{ApiError, ApiState, metrics::record_user_lookup};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/users", get(get_all_users))
        .route("/users/{id}", get(get_user_by_id))
}

/// Get all users
async fn get_all_users(State(state): State<ApiState>) -> Json<Vec<User>> {
    Json(state.users.list_all().to_vec())
}

/// Get user by ID
async fn get_user_by_id(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.find_by_id(id).cloned();
    record_user_lookup(user.is_some());

    user.map(Json).ok_or(ApiError::UserNotFound(id))
}
