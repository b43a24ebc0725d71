//! Sakhi backend: the HTTP API in front of the document store.
//!
//! This crate wires the axum router (users, scans, community reports,
//! activities), the shared middleware, and the server lifecycle. The store
//! itself comes from the `sakhi-adapters` crate and is injected through
//! [`AppState`].

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::info;

pub use config::Config;
pub use errors::{ApiError, StartupError};
pub use state::AppState;

/// Builds the full application router over the given state.
pub fn build_router(state: AppState) -> Router {
    api::router()
        .layer(axum::middleware::map_response(middleware::json_method_not_allowed))
        .layer(middleware::http_trace())
        .layer(middleware::cors())
        .with_state(state)
}

/// Connects the configured store and serves until Ctrl+C or SIGTERM.
pub async fn start_server(config: Config) -> Result<(), StartupError> {
    info!("Connecting document store...");
    let store = database::connect(&config.store).await?;
    let app = build_router(AppState::new(store));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
