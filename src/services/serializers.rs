// Serializers for prompt import/export

use anyhow::Result;
use crate::domain::Prompt;

/// Strategy trait for import/export formats
pub trait PromptSerializer: Send + Sync {
    fn serialize(&self, prompts: &[Prompt]) -> Result<String>;
    fn deserialize(&self, content: &str) -> Result<Vec<Prompt>>;
    fn file_extension(&self) -> &'static str;
    fn content_type(&self) -> &'static str;
}

/// YAML serializer (seed files)
pub struct YamlSerializer;

impl PromptSerializer for YamlSerializer {
    fn serialize(&self, prompts: &[Prompt]) -> Result<String> {
        Ok(serde_yaml::to_string(prompts)?)
    }

    fn deserialize(&self, content: &str) -> Result<Vec<Prompt>> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn file_extension(&self) -> &'static str {
        "yml"
    }

    fn content_type(&self) -> &'static str {
        "application/x-yaml"
    }
}

/// JSON serializer
pub struct JsonSerializer;

impl PromptSerializer for JsonSerializer {
    fn serialize(&self, prompts: &[Prompt]) -> Result<String> {
        Ok(serde_json::to_string_pretty(prompts)?)
    }

    fn deserialize(&self, content: &str) -> Result<Vec<Prompt>> {
        Ok(serde_json::from_str(content)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Pick a serializer by format name or extension
pub fn for_format(format: &str) -> Option<Box<dyn PromptSerializer>> {
    match format.to_ascii_lowercase().as_str() {
        "json" => Some(Box::new(JsonSerializer)),
        "yaml" | "yml" => Some(Box::new(YamlSerializer)),
        _ => None,
    }
}
