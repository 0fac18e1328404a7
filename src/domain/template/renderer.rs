// Preview rendering and clipboard export

use std::collections::HashMap;

use super::ast::{Segment, Template};

/// Current value per variable name. Unset names behave like empty strings.
pub type VariableValues = HashMap<String, String>;

/// Join segments, substituting variable values.
///
/// A missing or empty value renders as `{name}` so the gap stays visible.
pub fn render(segments: &[Segment], values: &VariableValues) -> String {
    let mut result = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Variable(name) => match values.get(name).filter(|v| !v.is_empty()) {
                Some(value) => result.push_str(value),
                None => {
                    result.push('{');
                    result.push_str(name);
                    result.push('}');
                }
            },
        }
    }

    result
}

/// Text handed to the clipboard.
///
/// With no variables the raw template is returned untouched; otherwise the rendered preview.
pub fn export_text(template: &Template, values: &VariableValues, variable_names: &[String]) -> String {
    if variable_names.is_empty() {
        template.source().to_string()
    } else {
        render(template.segments(), values)
    }
}
