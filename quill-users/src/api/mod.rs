//! HTTP API handlers for quill-users

pub mod users;

pub use users::user_routes;
