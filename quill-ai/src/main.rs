//! quill-ai - AI content generation microservice

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quill_ai::llm::OpenAiCompatibleModel;
use quill_ai::models::PostDto;
use quill_ai::{build_router, AppState};
use quill_common::config::{Module, ServiceArgs, ServiceConfig};
use quill_common::{logging, server, HttpFetcher};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("quill_ai");
    info!("Starting Quill AI service (quill-ai) v{}", env!("CARGO_PKG_VERSION"));

    let args = ServiceArgs::parse();
    let config = ServiceConfig::load(Module::Ai, &args).context("Failed to load configuration")?;

    let model = OpenAiCompatibleModel::new(&config.model).context("Failed to build model client")?;
    info!("Model: {} at {}", config.model.name, model.endpoint());

    info!("Post service: {}", config.peers.post_service);
    let posts = HttpFetcher::<PostDto>::new(config.peers.post_service.clone(), "posts", "post")
        .context("Failed to build post service client")?;

    let app = build_router(AppState::new(Arc::new(model), Arc::new(posts)));

    server::serve(app, &config.bind_addr()).await.context("Server error")?;
    Ok(())
}
