use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use holdings_tracker_tui::{
    api::HoldingsApi,
    app::{App, HoldingsViewModel},
    config::Config,
    db::SqliteHoldingsCache,
    logging,
    services::{FetchCoordinator, HoldingsRepositoryImpl},
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::parse();

    logging::init_tracing(&config.log_path())?;

    let db_path = config.db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let db_connect_options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let connection = SqlitePool::connect_with(db_connect_options).await?;

    let cache = SqliteHoldingsCache::new(connection).await?;
    let api = HoldingsApi::new(&config.api_url, config.timeout())?;

    let repository = HoldingsRepositoryImpl::new(Arc::new(api), Arc::new(cache))
        .with_policy(config.mapping_policy())
        .with_remote_timeout(config.timeout());
    let view_model = HoldingsViewModel::new(FetchCoordinator::new(Arc::new(repository)));

    let mut app = App::new(view_model);
    app.run().await?;

    Ok(())
}
