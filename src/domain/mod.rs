// Domain model: prompts, their templates, and the note workspace

pub mod prompt;
pub mod template;
pub mod workspace;

pub use prompt::{DraftReport, Prompt, PromptDraft};
pub use workspace::Workspace;
