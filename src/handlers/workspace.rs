// JSON handlers for contexts, notes and assignments

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::workspace::{dates, Assignment, AssignmentDraft, Context, Note},
    error::AppError,
    AppState,
};

#[derive(Deserialize)]
pub struct NewContext {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
pub struct NewNote {
    context_id: String,
    assignment_id: Option<String>,
}

#[derive(Deserialize)]
pub struct NoteUpdate {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignmentLink {
    assignment_id: String,
}

/// At most one filter is applied, checked in field order
#[derive(Deserialize, Default)]
pub struct NoteFilter {
    context: Option<String>,
    assignment: Option<String>,
    q: Option<String>,
    recent: Option<usize>,
}

#[derive(Deserialize, Default)]
pub struct AssignmentFilter {
    context: Option<String>,
}

/// Note plus its formatted modification time
#[derive(Serialize)]
pub struct NoteView {
    #[serde(flatten)]
    note: Note,
    modified_label: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            modified_label: dates::format_date(note.last_modified),
            note,
        }
    }
}

/// Assignment plus the display fields the screens show next to it
#[derive(Serialize)]
pub struct AssignmentView {
    #[serde(flatten)]
    assignment: Assignment,
    due_label: String,
    due_soon: bool,
    overdue: bool,
}

impl AssignmentView {
    fn new(assignment: Assignment) -> Self {
        let now = Utc::now();
        Self {
            due_label: dates::format_due_date(assignment.due_date, now),
            due_soon: dates::is_due_soon(assignment.due_date, now),
            overdue: dates::is_overdue(assignment.due_date, now),
            assignment,
        }
    }
}

// GET /api/contexts
pub async fn list_contexts(State(state): State<Arc<AppState>>) -> Json<Vec<Context>> {
    Json(state.workspace.read().await.contexts().to_vec())
}

// POST /api/contexts
pub async fn add_context(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewContext>,
) -> Result<(StatusCode, Json<Context>), AppError> {
    let context = state.workspace.write().await.add_context(&body.name)?;
    Ok((StatusCode::CREATED, Json(context)))
}

// GET /api/notes
pub async fn list_notes(
    Query(filter): Query<NoteFilter>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<NoteView>> {
    let workspace = state.workspace.read().await;

    let notes: Vec<&Note> = if let Some(context) = &filter.context {
        workspace.notes_for_context(context)
    } else if let Some(assignment) = &filter.assignment {
        workspace.notes_for_assignment(assignment)
    } else if let Some(query) = &filter.q {
        workspace.search_notes(query)
    } else if let Some(limit) = filter.recent {
        workspace.recent_notes(limit)
    } else {
        workspace.notes().iter().collect()
    };

    Json(notes.into_iter().cloned().map(NoteView::from).collect())
}

// POST /api/notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewNote>,
) -> Result<(StatusCode, Json<NoteView>), AppError> {
    let note = state.workspace.write().await.create_note(
        &body.context_id,
        body.assignment_id.as_deref(),
        Utc::now(),
    )?;
    Ok((StatusCode::CREATED, Json(note.into())))
}

// PUT /api/notes/{id}
pub async fn update_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<NoteUpdate>,
) -> Result<Json<NoteView>, AppError> {
    let mut workspace = state.workspace.write().await;
    let now = Utc::now();

    if let Some(title) = &body.title {
        workspace.update_note_title(&id, title, now)?;
    }
    if let Some(content) = &body.content {
        workspace.update_note_content(&id, content, now)?;
    }

    workspace
        .note(&id)
        .cloned()
        .map(|note| Json(NoteView::from(note)))
        .ok_or_else(|| AppError::NotFound(format!("Unknown note: '{}'", id)))
}

// PUT /api/notes/{id}/assignment
pub async fn link_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<AssignmentLink>,
) -> Result<Json<NoteView>, AppError> {
    let mut workspace = state.workspace.write().await;
    let note = workspace.associate_note_with_assignment(&id, &body.assignment_id, Utc::now())?;
    Ok(Json(note.clone().into()))
}

// DELETE /api/notes/{id}/assignment
pub async fn unlink_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NoteView>, AppError> {
    let mut workspace = state.workspace.write().await;
    let note = workspace.disassociate_note_from_assignment(&id, Utc::now())?;
    Ok(Json(note.clone().into()))
}

// GET /api/assignments
pub async fn list_assignments(
    Query(filter): Query<AssignmentFilter>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<AssignmentView>> {
    let workspace = state.workspace.read().await;
    let assignments: Vec<&Assignment> = match &filter.context {
        Some(context) => workspace.assignments_for_context(context),
        None => workspace.assignments().iter().collect(),
    };

    Json(
        assignments
            .into_iter()
            .cloned()
            .map(AssignmentView::new)
            .collect(),
    )
}

// POST /api/assignments
pub async fn add_assignment(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<AssignmentDraft>,
) -> Result<(StatusCode, Json<AssignmentView>), AppError> {
    let assignment = state.workspace.write().await.add_assignment(draft)?;
    Ok((StatusCode::CREATED, Json(AssignmentView::new(assignment))))
}

// POST /api/assignments/{id}/toggle
pub async fn toggle_assignment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AssignmentView>, AppError> {
    let mut workspace = state.workspace.write().await;
    let assignment = workspace.toggle_assignment_completion(&id)?.clone();
    Ok(Json(AssignmentView::new(assignment)))
}
