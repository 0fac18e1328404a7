pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod services;
pub mod validation;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post, put},
    Router,
};
use chrono::Utc;
use tokio::sync::RwLock;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use std::sync::Arc;

use config::{yml_settings::YmlWorkspace, Settings};
use domain::Workspace;
use services::{prompt_service::DEFAULT_SEED, PromptService};

// Prompt bodies are short; anything larger is a mistake
const MAX_BODY_BYTES: usize = 256 * 1024;

// Application state
pub struct AppState {
    pub prompts: PromptService,
    pub workspace: RwLock<Workspace>,
}

impl AppState {
    /// Open storage, seed prompts if needed and load the workspace seed
    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        let pool = db::init_db(&settings.database)
            .await
            .context("Failed to initialize database")?;

        let seed = match &settings.seed_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Could not read seed file {}", path))?,
            None => DEFAULT_SEED.to_string(),
        };
        let prompts = PromptService::open(pool, &seed).await?;

        let workspace = YmlWorkspace::embedded()
            .context("Invalid workspace seed")?
            .into_workspace(Utc::now());

        Ok(Self {
            prompts,
            workspace: RwLock::new(workspace),
        })
    }
}

// Public function to create the router
pub async fn create_router(settings: &Settings) -> Result<Router> {
    let state = Arc::new(AppState::from_settings(settings).await?);
    Ok(router(state))
}

pub fn router(state: Arc<AppState>) -> Router {
    use handlers::{api, prompts, workspace};

    Router::new()
        // Prompt vault pages
        .route("/", get(prompts::index))
        .route("/prompts", post(prompts::create_prompt))
        .route("/prompts/new", get(prompts::new_prompt_page))
        .route("/prompts/{id}", get(prompts::view_prompt))
        .route("/prompts/{id}/values", post(prompts::update_values))
        .route("/prompts/{id}/preview", post(prompts::update_preview))
        .route("/prompts/{id}/export", post(prompts::export_prompt))
        .route("/prompts/{id}/delete", post(prompts::delete_prompt))

        // Prompt API
        .route("/api/prompts", get(api::list_prompts).post(api::create_prompt))
        .route("/api/prompts/check", post(api::check_draft))
        .route("/api/prompts/export", get(api::export_prompts))
        .route("/api/prompts/{id}", get(api::get_prompt))
        .route("/api/prompts/{id}/render", post(api::render_prompt))
        .route("/api/prompts/{id}/preview", post(api::edit_preview))

        // Workspace API
        .route("/api/contexts", get(workspace::list_contexts).post(workspace::add_context))
        .route("/api/notes", get(workspace::list_notes).post(workspace::create_note))
        .route("/api/notes/{id}", put(workspace::update_note))
        .route(
            "/api/notes/{id}/assignment",
            put(workspace::link_note).delete(workspace::unlink_note),
        )
        .route("/api/assignments", get(workspace::list_assignments).post(workspace::add_assignment))
        .route("/api/assignments/{id}/toggle", post(workspace::toggle_assignment))

        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
