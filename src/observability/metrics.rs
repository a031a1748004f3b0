//! Metrics collection and exposition.
//!
//! # Metrics
//! - `audit_requests_total` (counter): requests by endpoint, status
//! - `audit_request_duration_seconds` (histogram): latency by endpoint
//! - `audit_upstream_errors_total` (counter): failed upstream calls by kind
//! - `audit_extracted_items` (histogram): items returned per extraction, by kind
//!
//! Recording is a no-op until a recorder is installed, so handlers record
//! unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    counter!(
        "audit_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("audit_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_error(kind: &'static str) {
    counter!("audit_upstream_errors_total", "kind" => kind).increment(1);
}

pub fn record_extracted(kind: &'static str, items: usize) {
    histogram!("audit_extracted_items", "kind" => kind).record(items as f64);
}
