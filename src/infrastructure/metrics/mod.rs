//! Prometheus metrics for the template service.
//!
//! - Render metrics (renders by source, render latency)
//! - Template store metrics
//! - API error metrics

mod helpers;

pub use helpers::{encode_metrics, ApiMetrics, RenderMetrics, RenderTimer, StoreMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, HistogramVec,
    IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "meta_template";

lazy_static! {
    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Templates rendered, by source (preview, stored)
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total templates rendered",
        &["source"]
    ).unwrap();

    /// Render latency including variable registration
    pub static ref RENDER_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Template render latency in seconds",
        &["source"],
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
    ).unwrap();

    // ============================================================================
    // Store Metrics
    // ============================================================================

    /// Number of stored meta templates
    pub static ref TEMPLATES_STORED: IntGauge = register_int_gauge!(
        format!("{}_templates_stored", METRIC_PREFIX),
        "Number of stored meta templates"
    ).unwrap();

    // ============================================================================
    // API Metrics
    // ============================================================================

    /// API errors, by error code
    pub static ref API_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_api_errors_total", METRIC_PREFIX),
        "Total API error responses",
        &["code"]
    ).unwrap();
}
