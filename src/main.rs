use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use stock_strategy::app;
use stock_strategy::config::{AppConfig, StoreBackend};
use stock_strategy::logging::{init_logging, LoggingConfig};
use stock_strategy::state::AppState;
use stock_strategy::store::{MemoryStockStore, PgStockStore, StockStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    let logging = LoggingConfig::from_env().map_err(anyhow::Error::msg)?;
    init_logging(logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store: Arc<dyn StockStore> = match config.backend {
        StoreBackend::Postgres => {
            let db = config
                .database
                .as_ref()
                .context("postgres backend selected without database settings")?;
            let pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .acquire_timeout(Duration::from_secs(5))
                .connect(&db.url)
                .await
                .context("failed to connect to database")?;
            tracing::info!("Connected to database");

            if db.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("failed to run migrations")?;
                tracing::info!("Database migrations applied");
            }
            Arc::new(PgStockStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory stock store; data is lost on restart");
            Arc::new(MemoryStockStore::new())
        }
    };

    let state = AppState::new(store.clone()).with_ma_window(config.ma_window);
    let app = app::create_app(state, &config.cors_allowed_origins);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Stock strategy backend running at http://{}/", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Release the pool whether or not the server exited cleanly.
    store.close().await;
    tracing::info!("Shutdown complete");

    served.context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
