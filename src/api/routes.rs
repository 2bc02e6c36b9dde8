use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};

use crate::error::AppError;

use crate::server::middleware::api_key_auth;
use crate::server::AppState;

use super::health::health;
use super::metrics::prometheus_metrics;
use super::preview::preview;
use super::template::{
    create_template, delete_template, get_template, list_templates, render_template,
    update_template,
};
use super::variables::{extract_variables, list_variables};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/api/v1",
            Router::new()
                // Rendering
                .route("/preview", post(preview))
                // Variable catalog
                .route("/variables", get(list_variables))
                .route("/variables/extract", post(extract_variables))
                // Stored templates
                .route("/templates", get(list_templates).post(create_template))
                .route(
                    "/templates/{id}",
                    get(get_template).put(update_template).delete(delete_template),
                )
                .route("/templates/{id}/render", post(render_template))
                .route_layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
        .fallback(not_found)
}

/// Unmatched paths get the same JSON error body as every other failure
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
