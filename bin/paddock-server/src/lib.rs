//! paddock listing services.
//!
//! One library drives both binaries. Startup sequence:
//! 1. Load configuration from `PADDOCK_*` variables and the command line.
//! 2. Initialise structured logging.
//! 3. Open the SQLite pool, creating the database file if needed.
//! 4. Create and seed the service's table (runs once).
//! 5. Build the Axum router and serve it with graceful shutdown.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use paddock_store::{EntityKind, EntityRepo, Events, ListingRepo, Races, SqlitePool};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{Cli, Config, Service};
use crate::state::AppState;

/// Run `service` until SIGINT or SIGTERM.
pub async fn run(service: Service) -> anyhow::Result<()> {
    let cfg = Config::from_env(service).with_cli(Cli::parse());
    telemetry::init(&cfg);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        service = %cfg.service,
        "paddock starting"
    );

    let pool = paddock_store::connect(&cfg.database_url, cfg.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", cfg.database_url))?;
    info!(url = %cfg.database_url, "database ready");

    let app = match service {
        Service::Racing => routes::racing(prepare::<Races>(cfg.clone(), pool).await?),
        Service::Sports => routes::sports(prepare::<Events>(cfg.clone(), pool).await?),
    };

    serve(&cfg, app).await?;

    info!(service = %cfg.service, "paddock stopped");
    Ok(())
}

async fn prepare<K: EntityKind>(
    cfg: Config,
    pool: SqlitePool,
) -> anyhow::Result<Arc<AppState<K>>> {
    let repo = ListingRepo::<K>::new(pool).with_seed_rows(cfg.seed_rows);
    repo.init()
        .await
        .with_context(|| format!("failed to initialise table {}", K::TABLE))?;
    Ok(Arc::new(AppState::new(cfg, repo)))
}

async fn serve(cfg: &Config, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.bind_address.as_str())
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_address))?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
