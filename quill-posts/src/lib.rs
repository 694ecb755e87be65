//! quill-posts library - post records service
//!
//! Owns post records. Each post references its author by user identifier;
//! `/posts/:id/with-author` fetches that user from quill-users on a
//! best-effort basis.

use std::sync::Arc;

use axum::Router;
use quill_common::api::{health_routes, with_tracing};
use quill_common::FetchRelated;
use serde_json::Value;
use sqlx::SqlitePool;

pub mod api;
pub mod db;
pub mod models;

use db::PostRepository;

/// Remote lookup of users by identifier
pub type UserFetcher = Arc<dyn FetchRelated<Record = Value>>;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    /// User service client
    pub users: UserFetcher,
}

impl AppState {
    pub fn new(pool: SqlitePool, users: UserFetcher) -> Self {
        Self {
            posts: PostRepository::new(pool),
            users,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .merge(api::post_routes())
        .merge(health_routes("quill-posts", env!("CARGO_PKG_VERSION")))
        .with_state(state);

    with_tracing(app)
}
