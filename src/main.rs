use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use sales_report_api::api::handlers::AppStateInner;
use sales_report_api::api::routes::create_router;
use sales_report_api::config::Config;
use sales_report_api::{db, logging};

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Starting graceful shutdown...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL applies
    let config = Config::from_env().context("Failed to load configuration")?;

    logging::init(&config.logging);

    info!("==================================================");
    info!("Starting {} v{}", config.app.name, config.app.version);
    info!(
        "Environment: {}",
        if config.app.debug { "development" } else { "production" }
    );
    info!("Log level: {}", config.logging.level);
    info!("==================================================");

    let db = db::create_pool(&config.database).context("Failed to initialize database pool")?;

    let addr = config.server_address();
    let state = Arc::new(AppStateInner { config, db });

    // Create router
    let app = create_router(state.clone());

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind server")?;

    info!("Server listening on {}", addr);

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    state.db.close().await;

    info!("==================================================");
    info!("Stopping {}", state.config.app.name);
    info!("==================================================");

    Ok(())
}
