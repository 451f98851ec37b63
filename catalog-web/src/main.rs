//! Movie Catalog (catalog-web) - Main entry point
//!
//! Serves the catalog UI and the movie record API backed by SQLite.
//! The database pool is constructed here, before the listener binds,
//! and injected into handlers through application state.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_web::{build_router, AppState};

/// Command-line arguments for catalog-web
#[derive(Parser, Debug)]
#[command(name = "catalog-web")]
#[command(about = "Movie catalog web service")]
#[command(version)]
struct Args {
    /// SQLite connection string, e.g. sqlite://movies.db?mode=rwc
    #[arg(long, env = "CATALOG_DATABASE_URL")]
    database_url: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5780", env = "CATALOG_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments; missing CATALOG_DATABASE_URL aborts here
    let args = Args::parse();

    info!(
        "Starting Movie Catalog (catalog-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pool = catalog_common::db::init_database(&args.database_url)
        .await
        .context("Failed to connect to database")?;
    info!("✓ Connected to database");

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("catalog-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
