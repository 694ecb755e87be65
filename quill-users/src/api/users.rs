//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use quill_common::api::ApiResult;
use quill_common::db::RecordStore;
use quill_common::Error;
use tracing::info;

use crate::models::{User, UserDraft};
use crate::AppState;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.users.find_all().await?))
}

/// GET /users/:id
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<User>> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("user", id))?;
    Ok(Json(user))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Json<User>> {
    let user = state.users.insert(draft).await?;
    info!(user_id = user.id, "Created user");
    Ok(Json(user))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Json<User>> {
    let user = state
        .users
        .update(id, draft)
        .await?
        .ok_or_else(|| Error::not_found("user", id))?;
    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    if state.users.delete_by_id(id).await? {
        info!(user_id = id, "Deleted user");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("user", id).into())
    }
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}
