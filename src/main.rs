//! Barkeep server binary

use barkeep::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let state = build_state(&config).await?;
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "barkeep listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "mongodb_backend")]
async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    use barkeep::storage::MongoRepository;
    use std::sync::Arc;

    let client = mongodb::Client::with_uri_str(&config.database.uri).await?;
    let db = client.database(&config.database.database);
    tracing::info!(database = %config.database.database, "connected to MongoDB");

    Ok(AppState::new(
        Arc::new(MongoRepository::new(db.clone())),
        Arc::new(MongoRepository::new(db.clone())),
        Arc::new(MongoRepository::new(db)),
    ))
}

#[cfg(not(feature = "mongodb_backend"))]
async fn build_state(_config: &AppConfig) -> anyhow::Result<AppState> {
    tracing::info!("using in-memory storage");
    Ok(AppState::in_memory())
}
