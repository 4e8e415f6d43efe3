//! HTTP layer: configuration, server startup, routing, and handlers.

mod handlers;
pub mod routes;
mod state;


use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::ServiceExt;
use axum::extract::Request;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use handlers::{DeleteResponse, ErrorResponse, ProductPayload, ProductResponse};
pub use state::AppState;

/// Errors that stop the server from running.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(product_api::api::bind),
        help("Is another process already listening on this address?")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(product_api::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log verbosity (0 = warn, 1 = info, 2 = debug, 3+ = trace)
    pub verbosity: u8,
    /// Serve OpenAPI documentation at /docs
    pub enable_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            verbosity: 0,
            enable_docs: false,
        }
    }
}

impl Config {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Default tracing filter for a verbosity level, used when RUST_LOG is unset.
pub(crate) fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("product_api={level},tower_http={level}")
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbosity: u8) {
    // A subscriber may already be installed (e.g. by an embedding binary)
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and database.
///
/// Serves until the process is terminated; there is no graceful shutdown.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let app = routes::create_app(AppState::new(db), config.enable_docs);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .map_err(ApiError::Serve)?;
    Ok(())
}
