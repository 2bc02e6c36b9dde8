//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod metrics;
mod preview;
mod routes;
mod template;
mod variables;

// Re-export all handlers for use in server/app.rs
pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use preview::{preview, PreviewRequest, PreviewResponse};
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, get_template, list_templates, render_template,
    update_template,
};
pub use variables::{extract_variables, list_variables, ExtractRequest, ExtractResponse};
