//! Model-backed endpoints
//!
//! Model invocation failures are fatal (502). Undecodable model output is
//! not: `/ai/generate` always returns a title and content.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use quill_common::api::{ApiError, ApiResult};
use quill_common::FetchRelated;
use serde::Deserialize;
use tracing::info;

use crate::llm::{ChatModel, ModelError};
use crate::models::GeneratedContent;
use crate::services::{blog_comment_prompt, blog_post_prompt, parse_generated};
use crate::AppState;

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicQuery {
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    #[serde(rename = "postId")]
    pub post_id: Option<i64>,
}

/// Only an absent parameter is rejected; an empty value is passed through
fn required(value: Option<String>, name: &str) -> ApiResult<String> {
    value.ok_or_else(|| ApiError::BadRequest(format!("missing query parameter: {name}")))
}

/// GET /ai/chat?prompt=...
///
/// Raw completion, returned as plain text.
pub async fn chat(State(state): State<AppState>, Query(query): Query<ChatQuery>) -> ApiResult<String> {
    let prompt = required(query.prompt, "prompt")?;
    Ok(state.model.complete(&prompt).await?)
}

/// GET /ai/generate?topic=...
pub async fn generate_post(
    State(state): State<AppState>,
    Query(query): Query<TopicQuery>,
) -> ApiResult<Json<GeneratedContent>> {
    let topic = required(query.topic, "topic")?;
    info!(topic = %topic, model = state.model.model_name(), "Generating AI post");

    let raw = state.model.complete(&blog_post_prompt(&topic)).await?;
    Ok(Json(parse_generated(&raw, &topic)))
}

/// GET /ai/generate-comment?postId=...
///
/// The post is the subject of this request, so a failed post lookup is
/// not absorbed: 404 if quill-posts has no such post, 502 otherwise.
pub async fn generate_comment(
    State(state): State<AppState>,
    Query(query): Query<CommentQuery>,
) -> ApiResult<String> {
    let post_id = query
        .post_id
        .ok_or_else(|| ApiError::BadRequest("missing query parameter: postId".to_string()))?;
    info!(post_id, "Generating AI comment");

    let post = state.posts.fetch(post_id).await?;
    let prompt = blog_comment_prompt(&post.title, &post.content);

    Ok(state.model.complete(&prompt).await?)
}

/// Routes under `/ai`; camelCase aliases keep older clients working
pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/ai/chat", get(chat))
        .route("/ai/generate", get(generate_post))
        .route("/ai/generatePost", get(generate_post))
        .route("/ai/generate-comment", get(generate_comment))
        .route("/ai/generateComment", get(generate_comment))
}
