pub mod api;
pub mod config;
pub mod core_state;
pub mod hpi;
pub mod reference;
pub mod suggest;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize logging, load reference data, and run the API server until
/// interrupted.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let data_dir = config::reference_data_dir();
    let state = match core_state::CoreState::load(&data_dir) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Cannot load reference data from {}: {e}", data_dir.display());
            std::process::exit(1);
        }
    };

    let mut server = match api::server::start_api_server(state, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Cannot start API server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.session.server_addr, "Chartscribe is serving");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    // Give the graceful shutdown a moment to drain in-flight requests.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}
