//! HTTP API handlers for quill-posts

pub mod posts;

pub use posts::post_routes;
