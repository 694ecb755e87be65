//! quill-comments library - comment records service
//!
//! Owns comment records. `/comments/post/:post_id` combines the local
//! comments for a post with a best-effort lookup of the post itself from
//! quill-posts.

use std::sync::Arc;

use axum::Router;
use quill_common::api::{health_routes, with_tracing};
use quill_common::FetchRelated;
use serde_json::Value;
use sqlx::SqlitePool;

pub mod api;
pub mod db;
pub mod models;

use db::CommentRepository;

/// Remote lookup of posts by identifier
pub type PostFetcher = Arc<dyn FetchRelated<Record = Value>>;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub comments: CommentRepository,
    /// Post service client
    pub posts: PostFetcher,
}

impl AppState {
    pub fn new(pool: SqlitePool, posts: PostFetcher) -> Self {
        Self {
            comments: CommentRepository::new(pool),
            posts,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .merge(api::comment_routes())
        .merge(health_routes("quill-comments", env!("CARGO_PKG_VERSION")))
        .with_state(state);

    with_tracing(app)
}
