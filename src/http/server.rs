//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with one handler per canned route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests to the mock dispatcher

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{MatchedPath, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::MockConfig;
use crate::http::dispatch::Dispatcher;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::sink::{self, EventSink};
use crate::routing::{RouteError, RouteTable};

/// HTTP server for the mock device API.
pub struct MockServer {
    router: Router,
    dispatcher: Arc<Dispatcher>,
}

impl MockServer {
    /// Create a server from configuration, logging through `tracing`
    /// unless `observability.log_requests` is off.
    pub fn new(config: &MockConfig) -> Result<Self, RouteError> {
        Self::with_sink(config, sink::from_config(config.observability.log_requests))
    }

    /// Create a server that records command events into `sink`.
    pub fn with_sink(config: &MockConfig, sink: Arc<dyn EventSink>) -> Result<Self, RouteError> {
        let table = Arc::new(RouteTable::from_config(&config.routes)?);
        let dispatcher = Arc::new(Dispatcher::new(table, sink));
        let router = Self::build_router(
            dispatcher.clone(),
            Duration::from_secs(config.timeouts.request_secs),
        );

        Ok(Self { router, dispatcher })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(dispatcher: Arc<Dispatcher>, request_timeout: Duration) -> Router {
        let router = dispatcher
            .table()
            .iter()
            .fold(Router::new(), |router, route| {
                router.route(route.path(), any(command_handler))
            });

        router
            .with_state(dispatcher)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run the server until Ctrl+C/SIGTERM or until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.dispatcher.table().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handler shared by every canned route.
async fn command_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    matched: MatchedPath,
    method: Method,
    headers: HeaderMap,
) -> Response {
    match dispatcher.dispatch(matched.as_str(), &method, request_id(&headers)) {
        Some(canned) => canned.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
