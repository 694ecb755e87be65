//! HTTP pieces shared by every Quill service
//!
//! - [`ApiError`]: handler error type rendered as `{"error": {"code", "message"}}`
//! - [`health_routes`]: `GET /health`
//! - [`with_tracing`]: per-request trace spans

pub mod error;
pub mod health;

pub use error::{ApiError, ApiResult};
pub use health::{health_routes, HealthResponse};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Wrap a finished router with the request tracing layer
pub fn with_tracing(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http())
}
