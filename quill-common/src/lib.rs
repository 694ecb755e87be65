//! # Quill Common Library
//!
//! Shared code for all Quill microservices including:
//! - Error types and the HTTP error envelope
//! - Configuration loading (CLI > environment > TOML > defaults)
//! - Local record store plumbing (SQLite)
//! - Remote fetch capability for sibling services
//! - Resilient enrichment (fetch-or-placeholder)
//! - Health routes and logging setup

pub mod api;
pub mod config;
pub mod db;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod remote;
pub mod server;

pub use enrich::{enrich, fetch_or_placeholder, Enriched, ErrorPlaceholder, ForeignKeyed, Related};
pub use error::{Error, Result};
pub use remote::{FetchRelated, HttpFetcher, RemoteError};
