//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vacuum_mock_requests_total` (counter): handled command requests by path
//!
//! # Design Decisions
//! - Prometheus exporter is only installed when enabled in config
//! - Without an installed recorder the counter macros are no-ops

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const REQUESTS_TOTAL: &str = "vacuum_mock_requests_total";

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one handled request for `path`.
pub fn record_command(path: &str) {
    metrics::counter!(REQUESTS_TOTAL, "path" => path.to_string()).increment(1);
}
