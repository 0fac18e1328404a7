// In-memory owner of notes, contexts and assignments
//
// One Workspace value replaces the loose lists a screen would otherwise share. Handlers
// hold it behind a lock and call the CRUD methods below.

pub mod dates;
mod model;

pub use model::{Assignment, AssignmentDraft, Context, Note, Priority};

use chrono::{DateTime, NaiveTime, Utc};

use crate::error::AppError;

const UNTITLED_NOTE: &str = "Untitled Note";

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    contexts: Vec<Context>,
    notes: Vec<Note>,
    assignments: Vec<Assignment>,
}

impl Workspace {
    pub fn new(contexts: Vec<Context>, notes: Vec<Note>, assignments: Vec<Assignment>) -> Self {
        Self {
            contexts,
            notes,
            assignments,
        }
    }

    // Contexts

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, id: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.id == id)
    }

    pub fn add_context(&mut self, name: &str) -> Result<Context, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Please enter a context name".to_string()));
        }

        let context = Context {
            id: new_id(),
            name: name.to_string(),
            color: random_color(),
        };
        self.contexts.push(context.clone());
        Ok(context)
    }

    // Notes

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn create_note(
        &mut self,
        context_id: &str,
        assignment_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Note, AppError> {
        self.require_context(context_id)?;
        if let Some(assignment_id) = assignment_id {
            self.require_assignment(assignment_id)?;
        }

        let note = Note {
            id: new_id(),
            title: UNTITLED_NOTE.to_string(),
            context_id: context_id.to_string(),
            content: String::new(),
            last_modified: now,
            assignment_id: assignment_id.map(str::to_string),
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn update_note_content(&mut self, note_id: &str, content: &str, now: DateTime<Utc>) -> Result<&Note, AppError> {
        let note = self.note_mut(note_id)?;
        note.content = content.to_string();
        note.last_modified = now;
        Ok(note)
    }

    pub fn update_note_title(&mut self, note_id: &str, title: &str, now: DateTime<Utc>) -> Result<&Note, AppError> {
        let note = self.note_mut(note_id)?;
        note.title = title.to_string();
        note.last_modified = now;
        Ok(note)
    }

    pub fn associate_note_with_assignment(
        &mut self,
        note_id: &str,
        assignment_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Note, AppError> {
        self.require_assignment(assignment_id)?;
        let note = self.note_mut(note_id)?;
        note.assignment_id = Some(assignment_id.to_string());
        note.last_modified = now;
        Ok(note)
    }

    pub fn disassociate_note_from_assignment(&mut self, note_id: &str, now: DateTime<Utc>) -> Result<&Note, AppError> {
        let note = self.note_mut(note_id)?;
        note.assignment_id = None;
        note.last_modified = now;
        Ok(note)
    }

    pub fn notes_for_assignment(&self, assignment_id: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.assignment_id.as_deref() == Some(assignment_id))
            .collect()
    }

    pub fn notes_for_context(&self, context_id: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.context_id == context_id).collect()
    }

    /// Most recently modified first
    pub fn recent_notes(&self, limit: usize) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes.iter().collect();
        notes.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        notes.truncate(limit);
        notes
    }

    /// Case-insensitive match on title or content. A blank query matches everything.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        let needle = query.trim().to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                needle.is_empty()
                    || n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // Assignments

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_for_context(&self, context_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.context_id == context_id)
            .collect()
    }

    pub fn add_assignment(&mut self, draft: AssignmentDraft) -> Result<Assignment, AppError> {
        if draft.title.trim().is_empty() {
            return Err(AppError::BadRequest("Please enter an assignment title".to_string()));
        }
        let due_day = draft
            .due_date
            .ok_or_else(|| AppError::BadRequest("Please select a due date".to_string()))?;
        if draft.context_id.trim().is_empty() {
            return Err(AppError::BadRequest("Please select a context".to_string()));
        }
        self.require_context(&draft.context_id)?;

        let assignment = Assignment {
            id: new_id(),
            title: draft.title,
            context_id: draft.context_id,
            due_date: due_day.and_time(NaiveTime::MIN).and_utc(),
            description: draft.description,
            completed: false,
            priority: draft.priority.unwrap_or_default(),
        };
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    pub fn toggle_assignment_completion(&mut self, assignment_id: &str) -> Result<&Assignment, AppError> {
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown assignment: '{}'", assignment_id)))?;
        assignment.completed = !assignment.completed;
        Ok(assignment)
    }

    fn note_mut(&mut self, note_id: &str) -> Result<&mut Note, AppError> {
        self.notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown note: '{}'", note_id)))
    }

    fn require_context(&self, context_id: &str) -> Result<(), AppError> {
        self.context(context_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Unknown context: '{}'", context_id)))
    }

    fn require_assignment(&self, assignment_id: &str) -> Result<(), AppError> {
        if self.assignments.iter().any(|a| a.id == assignment_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Unknown assignment: '{}'", assignment_id)))
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn random_color() -> String {
    let bytes = uuid::Uuid::new_v4().into_bytes();
    format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
}
