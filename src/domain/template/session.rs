// Viewer state for one open prompt

use super::ast::Template;
use super::parser::TemplateParser;
use super::renderer::{self, VariableValues};
use super::reverse;

/// Owns the values typed for one prompt while it is open.
///
/// The template is parsed once; every edit is one synchronous render or reverse-map pass.
#[derive(Debug, Clone)]
pub struct PromptSession {
    template: Template,
    variable_names: Vec<String>,
    values: VariableValues,
}

impl PromptSession {
    /// Open `content` with every variable set to `""`
    pub fn new(content: &str) -> Self {
        let template = TemplateParser::parse(content);
        let variable_names = template.variable_names();
        let values = variable_names
            .iter()
            .map(|name| (name.clone(), String::new()))
            .collect();

        Self {
            template,
            variable_names,
            values,
        }
    }

    /// Open `content` and take known names from `prefilled`; anything else is dropped
    pub fn with_values(content: &str, prefilled: &VariableValues) -> Self {
        let mut session = Self::new(content);
        for (name, value) in prefilled {
            session.set_value(name, value);
        }
        session
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    pub fn values(&self) -> &VariableValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Update one input field. Names not in the template are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.to_string();
        }
    }

    /// Take an edited preview as the source of truth, resync the values and
    /// return the re-rendered preview
    pub fn edit_preview(&mut self, edited: &str) -> String {
        self.values = reverse::reverse_map(self.template.segments(), edited, &self.variable_names);
        self.preview()
    }

    pub fn preview(&self) -> String {
        renderer::render(self.template.segments(), &self.values)
    }

    pub fn export_text(&self) -> String {
        renderer::export_text(&self.template, &self.values, &self.variable_names)
    }

    /// Copying is allowed for plain prompts, or once every variable has a value
    pub fn is_complete(&self) -> bool {
        self.variable_names.is_empty() || self.values.values().all(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initialises_all_values_empty() {
        let session = PromptSession::new("Hello [name], welcome to [platform]!");
        assert_eq!(session.variable_names(), &["name", "platform"]);
        assert_eq!(session.value("name"), "");
        assert_eq!(session.value("platform"), "");
        assert_eq!(session.preview(), "Hello {name}, welcome to {platform}!");
        assert!(!session.is_complete());
    }

    #[test]
    fn test_set_value_rerenders_preview() {
        let mut session = PromptSession::new("Hello [name]!");
        session.set_value("name", "Bo");
        assert_eq!(session.preview(), "Hello Bo!");
        assert!(session.is_complete());
    }

    #[test]
    fn test_set_value_ignores_unknown_names() {
        let mut session = PromptSession::new("Hello [name]!");
        session.set_value("stranger", "x");
        assert_eq!(session.values().len(), 1);
        assert!(!session.values().contains_key("stranger"));
    }

    #[test]
    fn test_edit_preview_syncs_values() {
        let mut session = PromptSession::new("Hello [name], welcome to [platform]!");
        let preview = session.edit_preview("Hello Ada, welcome to Perop!");
        assert_eq!(session.value("name"), "Ada");
        assert_eq!(session.value("platform"), "Perop");
        assert_eq!(preview, "Hello Ada, welcome to Perop!");
    }

    #[test]
    fn test_edit_preview_that_breaks_anchor_clears_value() {
        let mut session = PromptSession::new("Hello [name]!");
        session.set_value("name", "Bo");
        let preview = session.edit_preview("Hi Bo!");
        assert_eq!(session.value("name"), "");
        assert_eq!(preview, "Hello {name}!");
    }

    #[test]
    fn test_with_values_keeps_known_names_only() {
        let prefilled: VariableValues = [
            ("name".to_string(), "Alex".to_string()),
            ("extra".to_string(), "nope".to_string()),
        ]
        .into_iter()
        .collect();
        let session = PromptSession::with_values("Dear [name], your [item]", &prefilled);
        assert_eq!(session.value("name"), "Alex");
        assert_eq!(session.value("item"), "");
        assert!(!session.values().contains_key("extra"));
    }

    #[test]
    fn test_plain_prompt_is_complete_and_exports_verbatim() {
        let session = PromptSession::new("Hello, world!");
        assert!(session.is_complete());
        assert_eq!(session.export_text(), "Hello, world!");
    }

    #[test]
    fn test_export_with_variables_is_preview() {
        let mut session = PromptSession::new("Dear [name], your [item] has shipped to [name].");
        session.set_value("name", "Alex");
        session.set_value("item", "order");
        assert_eq!(session.export_text(), "Dear Alex, your order has shipped to Alex.");
    }
}
