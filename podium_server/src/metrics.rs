//! Prometheus metrics for monitoring server health and traffic.
//!
//! Metrics are exposed in Prometheus text format on a dedicated listener,
//! enabled by setting `METRICS_BIND`. Request counts come from the request
//! middleware; domain counters are recorded by the handlers that perform
//! the operation.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use podium_server::metrics;
//! use std::net::SocketAddr;
//!
//! // Initialize metrics exporter
//! let addr: SocketAddr = "127.0.0.1:9890".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! // Record HTTP request
//! metrics::http_requests_total("POST", "/tournaments", 201);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Sets up a Prometheus scrape endpoint on the specified address.
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// Increments the total HTTP request counter with method, path, and status labels.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

// ============================================================================
// Domain Metrics
// ============================================================================

/// Increment tournaments created counter.
pub fn tournaments_created_total() {
    metrics::counter!("tournaments_created_total").increment(1);
}

/// Increment tournaments closed counter.
pub fn tournaments_closed_total() {
    metrics::counter!("tournaments_closed_total").increment(1);
}

/// Increment point transfers counter.
pub fn points_transfers_total() {
    metrics::counter!("points_transfers_total").increment(1);
}
