//! Post CRUD endpoints and the post-with-author composite read

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use quill_common::api::ApiResult;
use quill_common::db::RecordStore;
use quill_common::{enrich, Enriched, Error};
use tracing::{debug, info};

use crate::models::{Post, PostDraft, PostWithAuthor};
use crate::AppState;

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.posts.find_all().await?))
}

/// GET /posts/:id
pub async fn get_post(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Post>> {
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("post", id))?;
    Ok(Json(post))
}

/// GET /posts/:id/with-author
///
/// 404 when the post is absent (the user service is not contacted).
/// Otherwise always 200; `author` degrades to a placeholder if the user
/// service fails.
pub async fn get_post_with_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PostWithAuthor>> {
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("post", id))?;

    let Enriched { primary, related } = enrich(post, state.users.as_ref()).await;
    debug!(post_id = id, author_found = related.is_found(), "Enriched post");

    Ok(Json(PostWithAuthor {
        post: primary,
        author: related,
    }))
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> ApiResult<Json<Post>> {
    let post = state.posts.insert(draft).await?;
    info!(post_id = post.id, author_id = post.author_id, "Created post");
    Ok(Json(post))
}

/// PUT /posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<PostDraft>,
) -> ApiResult<Json<Post>> {
    let post = state
        .posts
        .update(id, draft)
        .await?
        .ok_or_else(|| Error::not_found("post", id))?;
    Ok(Json(post))
}

/// DELETE /posts/:id
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    if state.posts.delete_by_id(id).await? {
        info!(post_id = id, "Deleted post");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("post", id).into())
    }
}

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post).put(update_post).delete(delete_post))
        .route("/posts/:id/with-author", get(get_post_with_author))
}
