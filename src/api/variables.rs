//! Variable catalog and extraction endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::template::{get_all_variables_by_category, get_variable_names, VariableCategory};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: &'static [VariableCategory],
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub variables: Vec<String>,
}

/// GET /api/v1/variables - Variable catalog for editor pickers
pub async fn list_variables() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        categories: get_all_variables_by_category(),
    })
}

/// POST /api/v1/variables/extract - Variables referenced by a template
#[tracing::instrument(name = "http.extract_variables", skip(request))]
pub async fn extract_variables(Json(request): Json<ExtractRequest>) -> Json<ExtractResponse> {
    Json(ExtractResponse {
        variables: get_variable_names(&request.template),
    })
}
