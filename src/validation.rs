// Validation functions for promptvault
// Provides reusable validation logic for forms and API input

use crate::domain::PromptDraft;
use crate::error::AppError;

/// Validate that a string is not empty
///
/// Returns Ok(()) if non-empty, Err(AppError::BadRequest) if empty
pub fn validate_not_empty(field_name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

/// Validate a new prompt before it is stored
///
/// Title, content and description are required, and no variable name may repeat
pub fn validate_prompt_draft(draft: &PromptDraft) -> Result<(), AppError> {
    validate_not_empty("Title", &draft.title)?;
    validate_not_empty("Content", &draft.content)?;
    validate_not_empty("Description", &draft.description)?;

    let report = draft.check();
    if report.has_duplicates() {
        return Err(AppError::BadRequest(format!(
            "Duplicate variable names: {}",
            report.duplicate_variables.join(", ")
        )));
    }

    Ok(())
}
