//! quill-users library - user records service
//!
//! Owns user records. Has no outbound dependencies; posts and comments
//! reference users by identifier and fetch them from here.

use axum::Router;
use quill_common::api::{health_routes, with_tracing};
use sqlx::SqlitePool;

pub mod api;
pub mod db;
pub mod models;

use db::UserRepository;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
}

impl AppState {
    /// Create state over an initialized pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .merge(api::user_routes())
        .merge(health_routes("quill-users", env!("CARGO_PKG_VERSION")))
        .with_state(state);

    with_tracing(app)
}
