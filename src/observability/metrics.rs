//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route path, status
//! - `http_request_duration_seconds` (histogram): dispatch latency by method, path
//! - `http_serialization_errors_total` (counter): unencodable handler results by path
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op, so tests need no setup
//! - Labels use the registered route path, never the raw request URI

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record one dispatched request.
pub fn record_request(method: &'static str, path: &str, status: u16, start: Instant) {
    counter!(
        "http_requests_total",
        "method" => method,
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a handler result that could not be serialized.
pub fn record_serialization_error(path: &str) {
    counter!("http_serialization_errors_total", "path" => path.to_string()).increment(1);
}
