// JSON API for prompts: live render, reverse mapping, draft checks, export

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

use super::common::SessionView;
use crate::{
    domain::{template::PromptSession, DraftReport, Prompt, PromptDraft},
    error::AppError,
    services::serializers,
    AppState,
};

#[derive(Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    values: HashMap<String, String>,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    preview: String,
}

#[derive(Deserialize)]
pub struct ExportParams {
    format: Option<String>,
}

// GET /api/prompts
pub async fn list_prompts(State(state): State<Arc<AppState>>) -> Json<Vec<Prompt>> {
    Json(state.prompts.list().await)
}

// POST /api/prompts
pub async fn create_prompt(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<PromptDraft>,
) -> Result<(StatusCode, Json<Prompt>), AppError> {
    let prompt = state.prompts.create(draft).await?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

// POST /api/prompts/check - Inline hints while the form is being filled
pub async fn check_draft(Json(draft): Json<PromptDraft>) -> Json<DraftReport> {
    Json(draft.check())
}

// GET /api/prompts/{id}
pub async fn get_prompt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Prompt>, AppError> {
    Ok(Json(state.prompts.get(&id).await?))
}

// POST /api/prompts/{id}/render - Values typed into the inputs
pub async fn render_prompt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<SessionView>, AppError> {
    let prompt = state.prompts.get(&id).await?;
    let session = PromptSession::with_values(&prompt.content, &request.values);
    Ok(Json(SessionView::from(&session)))
}

// POST /api/prompts/{id}/preview - Preview edited directly
pub async fn edit_preview(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<SessionView>, AppError> {
    let prompt = state.prompts.get(&id).await?;
    let mut session = PromptSession::new(&prompt.content);
    session.edit_preview(&request.preview);
    Ok(Json(SessionView::from(&session)))
}

// GET /api/prompts/export?format=json|yaml
pub async fn export_prompts(
    Query(params): Query<ExportParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let format = params.format.as_deref().unwrap_or("json");
    let serializer = serializers::for_format(format)
        .ok_or_else(|| AppError::BadRequest(format!("Unsupported export format: '{}'", format)))?;

    let body = state
        .prompts
        .export(serializer.as_ref())
        .await
        .map_err(|e| AppError::Internal(format!("Export failed: {}", e)))?;

    let disposition = format!(
        "attachment; filename=\"prompts.{}\"",
        serializer.file_extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, serializer.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
