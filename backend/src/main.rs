//! Health Assessment Backend
//!
//! Serves the assessment form's results and the chat assistant.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: validation, the optional text generator and chat fallback
//! - Shared crate: the metrics engine and symptom classifier

use anyhow::{bail, Result};
use health_assessment_backend::{config::AppConfig, routes, state::AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let production = AppConfig::is_production();
    init_tracing(production);

    let config = AppConfig::load()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if production { "production" } else { "development" },
        generator = config.generator.is_usable(),
        model = %config.generator.model,
        "Starting Health Assessment Backend"
    );

    if production {
        check_production_config(&config)?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::create_router(AppState::new(config)?);

    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// JSON logs in production, pretty logs otherwise; `RUST_LOG` wins when set
fn init_tracing(production: bool) {
    let default_filter = if production {
        "health_assessment_backend=info,tower_http=info"
    } else {
        "health_assessment_backend=debug,tower_http=debug"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn check_production_config(config: &AppConfig) -> Result<()> {
    let problems = config.production_errors();
    for problem in &problems {
        error!(%problem, "Configuration error");
    }
    if !problems.is_empty() {
        bail!("Invalid production configuration ({} problem(s))", problems.len());
    }
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
///
/// A handler that fails to install never resolves, so the other one still
/// drives shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, starting graceful shutdown"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, starting graceful shutdown");
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
