// Stored prompts and the creation-form draft

use serde::{Deserialize, Serialize};

use super::template::{duplicate_variable_names, TemplateParser};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields typed into the "new prompt" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PromptDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
}

/// Inline hints for a draft. Never an error: the form just disables saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftReport {
    pub missing_fields: Vec<&'static str>,
    pub variables: Vec<String>,
    pub duplicate_variables: Vec<String>,
}

impl DraftReport {
    pub fn can_save(&self) -> bool {
        self.missing_fields.is_empty() && self.duplicate_variables.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_variables.is_empty()
    }

    /// Human-readable hint lines, one per problem
    pub fn hints(&self) -> Vec<String> {
        let mut hints: Vec<String> = self
            .missing_fields
            .iter()
            .map(|field| format!("{} is required.", field))
            .collect();

        if self.has_duplicates() {
            hints.push(format!(
                "Duplicate variable names detected: {}",
                self.duplicate_variables.join(", ")
            ));
        }

        hints
    }
}

impl PromptDraft {
    pub fn check(&self) -> DraftReport {
        let mut missing_fields = Vec::new();
        if self.title.trim().is_empty() {
            missing_fields.push("Title");
        }
        if self.content.trim().is_empty() {
            missing_fields.push("Content");
        }
        if self.description.trim().is_empty() {
            missing_fields.push("Description");
        }

        let template = TemplateParser::parse(&self.content);

        DraftReport {
            missing_fields,
            variables: template.variable_names(),
            duplicate_variables: duplicate_variable_names(template.segments()),
        }
    }

    /// Build the stored prompt. Text is kept exactly as typed.
    pub fn into_prompt(self, id: String) -> Prompt {
        Prompt {
            id,
            title: self.title,
            content: self.content,
            description: Some(self.description),
        }
    }
}
