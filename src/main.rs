//! Site administration service.
//!
//! A headless admin panel for web server site configurations, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │             SITE ADMIN SERVICE               │
//!                      │                                              │
//!   Admin Request      │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ──────────────────▶│  │  admin  │───▶│  sites  │───▶│ document │  │
//!                      │  │ router  │    │  store  │    │ + symlink│  │
//!                      │  └────┬────┘    └─────────┘    └──────────┘  │
//!                      │       │                                      │
//!                      │       │         ┌─────────┐    ┌──────────┐  │
//!                      │       └────────▶│ system  │───▶│ validate │  │
//!                      │                 │ reload  │    │ + reload │  │
//!                      │                 └─────────┘    └──────────┘  │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │         Cross-Cutting Concerns         │  │
//!                      │  │  ┌────────┐ ┌──────┐ ┌──────────────┐  │  │
//!                      │  │  │ config │ │ auth │ │observability │  │  │
//!                      │  │  └────────┘ └──────┘ └──────────────┘  │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use nginx_site_admin::admin::{setup_admin_router, AppState};
use nginx_site_admin::auth::{SessionStore, SuCredentialVerifier};
use nginx_site_admin::config::{load_config, AppConfig};
use nginx_site_admin::observability::logging::init_logging;
use nginx_site_admin::sites::SiteStore;
use nginx_site_admin::system::{ReloadOrchestrator, TokioCommandRunner};

#[derive(Parser)]
#[command(name = "nginx-site-admin")]
#[command(about = "Administrative service for web server site configurations")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "site-admin.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        AppConfig::default()
    };

    init_logging(&config.observability.log_level);

    if !args.config.exists() {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults");
    }
    tracing::info!(
        bind_address = %config.server.bind_address,
        sites_available = %config.paths.sites_available.display(),
        sites_enabled = %config.paths.sites_enabled.display(),
        "Configuration loaded"
    );

    let runner = Arc::new(TokioCommandRunner::new(Duration::from_secs(
        config.commands.timeout_secs,
    )));
    let state = AppState {
        store: Arc::new(SiteStore::new(
            config.paths.sites_available.clone(),
            config.paths.sites_enabled.clone(),
            config.paths.protected.clone(),
        )),
        reloader: Arc::new(ReloadOrchestrator::new(
            runner.clone(),
            config.commands.validate.clone(),
            config.commands.reload.clone(),
        )),
        sessions: Arc::new(SessionStore::new(Duration::from_secs(
            config.auth.session_ttl_secs,
        ))),
        verifier: Arc::new(SuCredentialVerifier::new(
            runner,
            config.auth.admin_user.clone(),
        )),
        browse_root: config.paths.browse_root.clone(),
        auth_required: config.auth.enabled,
    };

    let app = setup_admin_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Admin API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
