// Prompt vault pages: list, create, view, export

use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

use super::common::{highlight, HighlightPiece};
use crate::{
    domain::{
        template::{PromptSession, TemplateParser},
        DraftReport, Prompt, PromptDraft,
    },
    error::AppError,
    AppState,
};

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    prompts: Vec<PromptCard>,
}

struct PromptCard {
    id: String,
    title: String,
    description: String,
    variables: Vec<String>,
}

#[derive(Template)]
#[template(path = "new_prompt.html")]
struct NewPromptTemplate {
    draft: PromptDraft,
    highlighted: Vec<HighlightPiece>,
    variables: Vec<String>,
    hints: Vec<String>,
    can_save: bool,
}

impl NewPromptTemplate {
    fn new(draft: PromptDraft, report: &DraftReport) -> Self {
        Self {
            highlighted: highlight(&draft.content),
            variables: report.variables.clone(),
            hints: report.hints(),
            can_save: report.can_save(),
            draft,
        }
    }
}

#[derive(Template)]
#[template(path = "prompt.html")]
struct PromptTemplate {
    id: String,
    title: String,
    description: String,
    highlighted: Vec<HighlightPiece>,
    inputs: Vec<VariableInput>,
    preview: String,
    complete: bool,
}

struct VariableInput {
    name: String,
    value: String,
}

impl PromptTemplate {
    fn new(prompt: Prompt, session: &PromptSession) -> Self {
        let inputs = session
            .variable_names()
            .iter()
            .map(|name| VariableInput {
                name: name.clone(),
                value: session.value(name).to_string(),
            })
            .collect();

        Self {
            highlighted: highlight(&prompt.content),
            id: prompt.id,
            title: prompt.title,
            description: prompt.description.unwrap_or_default(),
            inputs,
            preview: session.preview(),
            complete: session.is_complete(),
        }
    }
}

// Form structs
#[derive(Deserialize)]
pub struct PreviewForm {
    #[serde(default)]
    preview: String,
}

// GET / - All prompts
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let prompts = state
        .prompts
        .list()
        .await
        .into_iter()
        .map(|p| PromptCard {
            variables: TemplateParser::parse(&p.content).variable_names(),
            id: p.id,
            title: p.title,
            description: p.description.unwrap_or_default(),
        })
        .collect();

    Ok(Html(IndexTemplate { prompts }.render()?))
}

// GET /prompts/new - Empty creation form
pub async fn new_prompt_page() -> Result<Html<String>, AppError> {
    let draft = PromptDraft::default();
    let report = draft.check();
    Ok(Html(NewPromptTemplate::new(draft, &report).render()?))
}

// POST /prompts - Create, or re-render the form with hints
pub async fn create_prompt(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<PromptDraft>,
) -> Result<Response, AppError> {
    let report = draft.check();
    if !report.can_save() {
        let page = NewPromptTemplate::new(draft, &report).render()?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    let prompt = state.prompts.create(draft).await?;
    Ok(Redirect::to(&format!("/prompts/{}", prompt.id)).into_response())
}

// GET /prompts/{id} - Viewer, inputs prefilled from the query string
pub async fn view_prompt(
    Path(id): Path<String>,
    Query(values): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render_viewer(&state, &id, &values).await
}

// POST /prompts/{id}/values - Variable inputs changed
pub async fn update_values(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    render_viewer(&state, &id, &values).await
}

// POST /prompts/{id}/preview - Preview edited by hand
pub async fn update_preview(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<PreviewForm>,
) -> Result<Html<String>, AppError> {
    let prompt = state.prompts.get(&id).await?;
    let mut session = PromptSession::new(&prompt.content);
    session.edit_preview(&form.preview);

    Ok(Html(PromptTemplate::new(prompt, &session).render()?))
}

// POST /prompts/{id}/export - Clipboard payload as plain text
pub async fn export_prompt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let prompt = state.prompts.get(&id).await?;
    let session = PromptSession::with_values(&prompt.content, &values);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        session.export_text(),
    )
        .into_response())
}

// POST /prompts/{id}/delete
pub async fn delete_prompt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, AppError> {
    state.prompts.delete(&id).await?;
    Ok(Redirect::to("/"))
}

async fn render_viewer(
    state: &AppState,
    id: &str,
    values: &HashMap<String, String>,
) -> Result<Html<String>, AppError> {
    let prompt = state.prompts.get(id).await?;
    let session = PromptSession::with_values(&prompt.content, values);
    Ok(Html(PromptTemplate::new(prompt, &session).render()?))
}
