//! Startup failures for the SSR host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid PORT value {raw:?}")]
    InvalidPort { raw: String },
    #[error("invalid HOST value {raw:?}")]
    InvalidHost { raw: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
