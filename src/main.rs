//! Color API demo service.
//!
//! This is the application entry point. It initializes tracing, reads the
//! environment configuration, resolves the display color and hostname once,
//! applies the optional startup gate, connects the color store when DB_URL is
//! set, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_api::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, STARTUP_DELAY};
use color_api::routes::create_router;
use color_api::state::AppState;
use color_api::store::ColorStore;
use color_api::{color, gate, identity};

/// Color API: a Kubernetes deployment demo service
#[derive(Parser, Debug)]
#[command(name = "color-api", version, about)]
struct Args {
    /// Listening port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "color_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from the environment
    let config = AppConfig::from_env()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    // Flags are fixed here for the life of the process; the readiness outcome
    // already includes the one-time coin flip
    let flags = config.flags;
    tracing::info!(
        delay_startup = flags.delay_startup,
        fail_liveness = flags.fail_liveness,
        fail_readiness = flags.fail_readiness,
        "Startup flags evaluated"
    );

    // Resolve color and hostname once; immutable for the process lifetime
    let resolved_color = color::resolve(
        config.default_color.as_deref(),
        config.color_config_path.as_deref(),
    );
    let hostname = identity::hostname();
    tracing::info!(color = %resolved_color, hostname = %hostname, "Resolved identity");

    // Startup gate: must run before the listener binds so nothing is served
    // during the delay, including probes
    gate::startup_gate(&flags, STARTUP_DELAY);

    // Database mode: the store must be reachable before the listener binds
    let store = match &config.db_url {
        Some(db_url) => match ColorStore::connect(db_url).await {
            Ok(store) => {
                tracing::info!("Connected to color store");
                Some(store)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error connecting to color store, not serving traffic");
                return Err(e.into());
            }
        },
        None => None,
    };

    // Create application state and router
    let state = AppState::new(resolved_color, hostname, flags, store);
    let app = create_router(state);

    // Start server
    let port = args.port.unwrap_or(config.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Color API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGTERM or Ctrl+C is received, draining in-flight requests.
/// Kubernetes sends SIGTERM on pod termination.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
