//! quill-comments - comment records microservice

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quill_comments::{build_router, AppState};
use quill_common::config::{Module, ServiceArgs, ServiceConfig};
use quill_common::{db, logging, server, HttpFetcher};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("quill_comments");
    info!("Starting Quill comment service (quill-comments) v{}", env!("CARGO_PKG_VERSION"));

    let args = ServiceArgs::parse();
    let config =
        ServiceConfig::load(Module::Comments, &args).context("Failed to load configuration")?;

    let pool = db::open_pool(config.database.as_deref())
        .await
        .context("Failed to open comment database")?;
    quill_comments::db::init_schema(&pool)
        .await
        .context("Failed to create comments table")?;

    info!("Post service: {}", config.peers.post_service);
    let posts = HttpFetcher::<Value>::new(config.peers.post_service.clone(), "posts", "post")
        .context("Failed to build post service client")?;

    let app = build_router(AppState::new(pool, Arc::new(posts)));

    server::serve(app, &config.bind_addr()).await.context("Server error")?;
    Ok(())
}
