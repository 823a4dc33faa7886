//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the route table from configuration
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin serving
//!
//! # Design Decisions
//! - Fail fast: any startup error ends startup
//! - Listener binds last (traffic only when the table is ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::config::MockConfig;
use crate::http::MockServer;
use crate::net::{self, ListenerError};
use crate::observability::metrics;
use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start serving `config` until shutdown.
pub async fn start(
    config: &MockConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let server = MockServer::new(config)?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Starting server"
    );
    let listener = net::bind(&config.listener).await?;

    server.run(listener, shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = MockConfig::default();
        config.listener.bind_address = occupied.local_addr().unwrap().to_string();

        let shutdown = Shutdown::new();
        let err = start(&config, shutdown.subscribe()).await.unwrap_err();
        assert!(matches!(err, StartupError::Listener(ListenerError::Bind { .. })));
    }

    #[tokio::test]
    async fn test_route_errors_precede_bind() {
        let mut config = MockConfig::default();
        config.routes[1].path = "no-slash".into();

        let shutdown = Shutdown::new();
        let err = start(&config, shutdown.subscribe()).await.unwrap_err();
        assert!(matches!(err, StartupError::Routes(_)));
    }

    #[tokio::test]
    async fn test_serves_until_triggered() {
        let mut config = MockConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        let handle = tokio::spawn(async move { start(&config, rx).await });

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        shutdown.trigger();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
