//! quill-users - user records microservice

use anyhow::{Context, Result};
use clap::Parser;
use quill_common::config::{Module, ServiceArgs, ServiceConfig};
use quill_common::{db, logging, server};
use quill_users::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("quill_users");
    info!("Starting Quill user service (quill-users) v{}", env!("CARGO_PKG_VERSION"));

    let args = ServiceArgs::parse();
    let config = ServiceConfig::load(Module::Users, &args).context("Failed to load configuration")?;

    let pool = db::open_pool(config.database.as_deref())
        .await
        .context("Failed to open user database")?;
    quill_users::db::init_schema(&pool)
        .await
        .context("Failed to create users table")?;

    let app = build_router(AppState::new(pool));

    server::serve(app, &config.bind_addr()).await.context("Server error")?;
    Ok(())
}
