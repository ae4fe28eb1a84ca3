use std::sync::Arc;

use anyhow::Context;

use singerx_api::auth::TokenService;
use singerx_api::config::AppConfig;
use singerx_api::db::Store;
use singerx_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_USER, DB_PASS, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    let store = Store::connect(&config.connection_uri())
        .await
        .context("building MongoDB client")?;
    let store = Arc::new(store);

    // Liveness check; the server listens whether or not the store is
    // reachable, so only the outcome is logged.
    {
        let store = store.clone();
        tokio::spawn(async move {
            match store.ping().await {
                Ok(()) => tracing::info!("connected to MongoDB"),
                Err(err) => tracing::error!("MongoDB ping failed: {err}"),
            }
        });
    }

    let state = AppState {
        store,
        tokens: TokenService::new(&config.access_token_secret),
    };
    let app = singerx_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("server listening on http://{bind_addr}");

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
