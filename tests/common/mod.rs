//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use vacuum_mock::config::MockConfig;
use vacuum_mock::http::MockServer;
use vacuum_mock::lifecycle::Shutdown;
use vacuum_mock::observability::CapturingSink;

/// Every canned route as `(path, body)`.
#[allow(dead_code)]
pub const VACUUM_ROUTES: [(&str, &str); 5] = [
    ("/", "OK\n"),
    ("/api/vacuum/start", "vacuum activated\n"),
    ("/api/vacuum/pause", "vacuum paused\n"),
    ("/api/vacuum/return", "vacuum returning to dock\n"),
    ("/api/vacuum/status", "vacuum status: cleaning\n"),
];

/// A mock server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub sink: CapturingSink,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the default mock with a capturing event sink.
pub async fn start_mock_server() -> TestServer {
    let sink = CapturingSink::new();
    let server = MockServer::with_sink(&MockConfig::default(), Arc::new(sink.clone())).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        sink,
        shutdown,
    }
}

/// Client without connection pooling or proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
