//! SSR host for the user-management dashboard.
//!
//! Serves the Leptos app, its `/pkg` assets, and a health probe. All user data
//! lives behind the remote REST API; this process holds no state of its own.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "dashboard host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "dashboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
