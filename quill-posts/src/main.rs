//! quill-posts - post records microservice

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quill_common::config::{Module, ServiceArgs, ServiceConfig};
use quill_common::{db, logging, server, HttpFetcher};
use quill_posts::{build_router, AppState};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("quill_posts");
    info!("Starting Quill post service (quill-posts) v{}", env!("CARGO_PKG_VERSION"));

    let args = ServiceArgs::parse();
    let config = ServiceConfig::load(Module::Posts, &args).context("Failed to load configuration")?;

    let pool = db::open_pool(config.database.as_deref())
        .await
        .context("Failed to open post database")?;
    quill_posts::db::init_schema(&pool)
        .await
        .context("Failed to create posts table")?;

    info!("User service: {}", config.peers.user_service);
    let users = HttpFetcher::<Value>::new(config.peers.user_service.clone(), "users", "user")
        .context("Failed to build user service client")?;

    let app = build_router(AppState::new(pool, Arc::new(users)));

    server::serve(app, &config.bind_addr()).await.context("Server error")?;
    Ok(())
}
