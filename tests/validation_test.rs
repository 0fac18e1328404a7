// Negative path tests for validation errors
// Tests that ensure invalid prompt drafts are rejected with useful messages

use promptvault::{domain::PromptDraft, validation};

fn draft(title: &str, content: &str, description: &str) -> PromptDraft {
    PromptDraft {
        title: title.to_string(),
        content: content.to_string(),
        description: description.to_string(),
    }
}

#[tokio::test]
async fn test_empty_string_rejected() {
    let result = validation::validate_not_empty("Title", "");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot be empty"));
}

#[tokio::test]
async fn test_whitespace_only_rejected() {
    let result = validation::validate_not_empty("Description", "   \n\t");
    assert!(result.is_err());
}

#[tokio::test]
async fn test_missing_content_named_in_error() {
    let result = validation::validate_prompt_draft(&draft("Greeting", "", "Says hi"));
    assert!(result.unwrap_err().to_string().contains("Content"));
}

#[tokio::test]
async fn test_duplicate_variables_rejected() {
    let result = validation::validate_prompt_draft(&draft("Echo", "[x] and [x]", "Twice"));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Duplicate variable names"));
    assert!(message.contains('x'));
}

#[tokio::test]
async fn test_empty_brackets_are_not_variables() {
    // `[]` is literal text, so it never counts as a duplicate
    let result = validation::validate_prompt_draft(&draft("List", "[] and []", "Empty pairs"));
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_valid_draft_accepted() {
    let result = validation::validate_prompt_draft(&draft(
        "Personalized Greeting",
        "Hello [name], welcome to [platform]!",
        "Greets a user",
    ));
    assert!(result.is_ok());
}
