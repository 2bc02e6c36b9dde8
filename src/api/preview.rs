//! Ad-hoc template preview endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::metrics::{RenderMetrics, RenderTimer};
use crate::server::AppState;
use crate::template::{value_to_string, RenderContext};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Template source; `null` or missing renders as empty
    #[serde(default)]
    pub template: Value,

    #[serde(flatten)]
    pub context: RenderContext,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub parsed: String,
}

/// Text of the `template` field.
///
/// Scalars are coerced to their JSON text; arrays and objects are rejected.
fn template_source(value: &Value) -> Result<String> {
    match value {
        Value::Array(_) | Value::Object(_) => Err(AppError::Validation(
            "template must be a string".to_string(),
        )),
        other => Ok(value_to_string(other)),
    }
}

/// POST /api/v1/preview - Render a template against the supplied data
#[tracing::instrument(name = "http.preview", skip(state, request))]
pub async fn preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>> {
    let template = template_source(&request.template)?;

    let max_len = state.settings.parser.max_template_length;
    if template.len() > max_len {
        return Err(AppError::Validation(format!(
            "template exceeds {} bytes",
            max_len
        )));
    }

    let timer = RenderTimer::start("preview");
    let parser = state.parser_for(&request.context);
    let parsed = parser.parse(&template, &request.context.override_data());
    timer.finish();
    RenderMetrics::record_preview();

    tracing::debug!(template_len = template.len(), "Preview rendered");

    Ok(Json(PreviewResponse { parsed }))
}
