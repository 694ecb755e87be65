//! HTTP API handlers for quill-ai

pub mod generate;

pub use generate::ai_routes;
