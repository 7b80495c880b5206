// Process bootstrap shared by the service binaries

use crate::core::config::{Config, Service};
use crate::core::routes::{build_file_storage_router, build_payment_router};
use crate::core::state::AppState;
use crate::core::tracing_init::init_tracing;
use anyhow::{Context, Result};
use axum::{serve, Router};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

/// Entry point for a service binary.
///
/// The optional first CLI argument is the config file path.
pub fn run(service: Service) -> Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);

    let config = Config::load(service, config_path.as_deref()).context(format!(
        "Failed to load configuration for {}. \
        Copy {}.example.toml to {} and adjust the values, or pass a path as the first argument.",
        service,
        service.name(),
        service.default_config_file()
    ))?;

    init_tracing(&config.logging)?;

    // Build Tokio runtime with configured number of threads
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(service, config, config_path))
}

async fn async_main(service: Service, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    let addr = config.server.bind_address(service);

    info!(
        service = %service,
        config_path = ?config_path,
        address = %addr,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Service starting"
    );

    let state = Arc::new(AppState::new(service, config));
    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(service = %service, address = %addr, "TCP listener bound successfully");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!(service = %service, "Shutting down gracefully");

    Ok(())
}

/// Router for the given service with the tracing middleware applied
pub fn build_app(state: Arc<AppState>) -> Router {
    let router = match state.service {
        Service::FileStorage => build_file_storage_router(state),
        Service::Payment => build_payment_router(state),
    };

    router.layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    )
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
