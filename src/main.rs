use std::io::stderr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ledger_api::api;
use ledger_api::config::{Config, StorageMode};
use ledger_api::engine::LedgerEngine;
use ledger_api::storage::{self, AccountStore, PostgresAccountStore, PostgresTransactionStore, TransactionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    setup_logging(config.log_level);

    let listener = TcpListener::bind(config.address).await
        .with_context(|| format!("Failed to bind to address {}", config.address))?;

    info!("Listening on {}", listener.local_addr()?);

    match config.storage_mode {
        StorageMode::InMemory => {
            warn!("Using in-memory storage; data will not survive a restart");
            serve(listener, LedgerEngine::in_memory()).await
        }
        StorageMode::Postgres => {
            let database_url = config.database_url.as_deref()
                .context("POSTGRESQL_URL must be set for postgres storage")?;

            let pool = storage::connect(database_url, config.max_connections).await?;
            let engine = LedgerEngine::new(
                Arc::new(PostgresAccountStore::new(pool.clone())),
                Arc::new(PostgresTransactionStore::new(pool.clone()))
            );

            let result = serve(listener, engine).await;
            pool.close().await;
            result
        }
    }
}

async fn serve<A: AccountStore, T: TransactionStore>(listener: TcpListener, engine: LedgerEngine<A, T>) -> Result<()> {
    axum::serve(listener, api::router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!("Failed to install SIGTERM handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down")
    }
}
