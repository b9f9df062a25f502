//! devotionals-server - HTTP CRUD service for devotional entries
//!
//! Resolves configuration, opens the SQLite database (creating the schema
//! on first run) and serves the API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use devotionals_common::config::{
    load_toml_config, locate_config_file, ServiceConfig, TomlConfig,
};
use devotionals_common::db::init_database;
use devotionals_server::cli::Args;
use devotionals_server::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = locate_config_file(args.config.as_deref());
    let file_config = match &config_path {
        Some(path) => load_toml_config(path).context("Failed to load configuration")?,
        None => TomlConfig::default(),
    };
    let config = ServiceConfig::resolve(&args.overrides(), &file_config);

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting devotionals-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_path {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
    info!("Database path: {}", config.database_path.display());

    let pool = init_database(&config.database_path, config.busy_timeout_ms)
        .await
        .context("Failed to initialize database")?;

    let app = build_router(AppState::new(pool.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
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
