//! Metrics helper structs for convenient metric recording

use std::time::Instant;

use prometheus::{Encoder, TextEncoder};

use super::{API_ERRORS_TOTAL, RENDERS_TOTAL, RENDER_DURATION_SECONDS, TEMPLATES_STORED};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record an ad-hoc preview render
    pub fn record_preview() {
        RENDERS_TOTAL.with_label_values(&["preview"]).inc();
    }

    /// Record a stored template render
    pub fn record_stored() {
        RENDERS_TOTAL.with_label_values(&["stored"]).inc();
    }
}

/// Measures one render and records it on [`RenderTimer::finish`]
pub struct RenderTimer {
    source: &'static str,
    started: Instant,
}

impl RenderTimer {
    pub fn start(source: &'static str) -> Self {
        Self {
            source,
            started: Instant::now(),
        }
    }

    pub fn finish(self) {
        RENDER_DURATION_SECONDS
            .with_label_values(&[self.source])
            .observe(self.started.elapsed().as_secs_f64());
    }
}

/// Helper struct for recording template store metrics
pub struct StoreMetrics;

impl StoreMetrics {
    pub fn set_stored(count: usize) {
        TEMPLATES_STORED.set(count as i64);
    }
}

/// Helper struct for recording API metrics
pub struct ApiMetrics;

impl ApiMetrics {
    /// Record an error response with its code
    pub fn record_error(code: &str) {
        API_ERRORS_TOTAL.with_label_values(&[code]).inc();
    }
}
