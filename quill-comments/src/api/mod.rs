//! HTTP API handlers for quill-comments

pub mod comments;

pub use comments::comment_routes;
