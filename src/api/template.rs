//! Meta template CRUD and render endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::metrics::{RenderMetrics, RenderTimer, StoreMetrics};
use crate::server::AppState;
use crate::template::{
    CreateTemplateRequest, MetaTemplate, RenderContext, RenderedMeta, TemplateListResponse,
    UpdateTemplateRequest,
};

/// POST /api/v1/templates - Create a new template
#[tracing::instrument(
    name = "http.create_template",
    skip(state, request),
    fields(template_id = %request.id)
)]
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<MetaTemplate>)> {
    let template: MetaTemplate = request.into();
    let created = state.template_store.create(template)?;
    StoreMetrics::set_stored(state.template_store.count());

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state.template_store.list();
    let total = templates.len();

    Json(TemplateListResponse { templates, total })
}

/// GET /api/v1/templates/{id} - Get a specific template
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MetaTemplate>> {
    Ok(Json(state.template_store.get(&id)?))
}

/// PUT /api/v1/templates/{id} - Update an existing template
#[tracing::instrument(name = "http.update_template", skip(state, request))]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<MetaTemplate>> {
    Ok(Json(state.template_store.update(&id, request)?))
}

/// DELETE /api/v1/templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.template_store.delete(&id)?;
    StoreMetrics::set_stored(state.template_store.count());

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/templates/{id}/render - Render a stored template's meta tags
#[tracing::instrument(name = "http.render_template", skip(state, context))]
pub async fn render_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(context): Json<RenderContext>,
) -> Result<Json<RenderedMeta>> {
    let timer = RenderTimer::start("stored");
    let parser = state.parser_for(&context);
    let rendered = state
        .template_store
        .render(&id, &parser, &context.override_data())?;
    timer.finish();
    RenderMetrics::record_stored();

    Ok(Json(rendered))
}
