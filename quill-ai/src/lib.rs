//! quill-ai library - AI-assisted content generation
//!
//! Builds prompts, invokes a generative model, and turns its free-form
//! output into structured content. Reads posts from quill-posts when
//! drafting comments.

use std::sync::Arc;

use axum::Router;
use quill_common::api::{health_routes, with_tracing};
use quill_common::FetchRelated;

pub mod api;
pub mod llm;
pub mod models;
pub mod services;

use llm::ChatModel;
use models::PostDto;

/// Remote lookup of posts by identifier
pub type PostFetcher = Arc<dyn FetchRelated<Record = PostDto>>;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    /// Post service client
    pub posts: PostFetcher,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, posts: PostFetcher) -> Self {
        Self { model, posts }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .merge(api::ai_routes())
        .merge(health_routes("quill-ai", env!("CARGO_PKG_VERSION")))
        .with_state(state);

    with_tracing(app)
}
