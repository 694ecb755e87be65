//! Comment CRUD endpoints and the comments-for-post read

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use quill_common::api::ApiResult;
use quill_common::db::RecordStore;
use quill_common::{fetch_or_placeholder, Error};
use tracing::info;

use crate::models::{Comment, CommentDraft, CommentsForPost};
use crate::AppState;

/// GET /comments
pub async fn list_comments(State(state): State<AppState>) -> ApiResult<Json<Vec<Comment>>> {
    Ok(Json(state.comments.find_all().await?))
}

/// GET /comments/:id
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Comment>> {
    let comment = state
        .comments
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("comment", id))?;
    Ok(Json(comment))
}

/// GET /comments/post/:post_id
///
/// Always 200, even with no comments. `post` degrades to a placeholder if
/// the post service fails; the local comments are returned regardless.
pub async fn comments_for_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<CommentsForPost>> {
    info!(post_id, "Fetching comments for post");

    let comments = state.comments.find_by_post_id(post_id).await?;
    let post = fetch_or_placeholder(state.posts.as_ref(), post_id).await;

    Ok(Json(CommentsForPost { post, comments }))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    Json(draft): Json<CommentDraft>,
) -> ApiResult<Json<Comment>> {
    let comment = state.comments.insert(draft).await?;
    info!(comment_id = comment.id, post_id = comment.post_id, "Created comment");
    Ok(Json(comment))
}

/// PUT /comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<CommentDraft>,
) -> ApiResult<Json<Comment>> {
    let comment = state
        .comments
        .update(id, draft)
        .await?
        .ok_or_else(|| Error::not_found("comment", id))?;
    Ok(Json(comment))
}

/// DELETE /comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.comments.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("comment", id).into())
    }
}

pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route("/comments/post/:post_id", get(comments_for_post))
}
