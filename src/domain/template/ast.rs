// Segment types for bracket-delimited prompt templates

use serde::{Deserialize, Serialize};

/// One piece of a parsed template.
///
/// Literal text may be empty (the parse always starts and ends with a literal and
/// keeps an empty literal between adjacent variables). Variable names are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    Literal(String),
    Variable(String),
}

impl Segment {
    pub fn value(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Variable(name) => name,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }

    /// Literal text, or `None` for a variable
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(text) => Some(text),
            Segment::Variable(_) => None,
        }
    }
}

/// A prompt body together with its parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub(super) fn new(source: String, segments: Vec<Segment>) -> Self {
        Self { source, segments }
    }

    /// The raw text exactly as it was entered
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Unique variable names in first-occurrence order
    pub fn variable_names(&self) -> Vec<String> {
        super::registry::extract_variable_names(&self.segments)
    }

    /// True when the text contains no `[name]` placeholders
    pub fn is_plain(&self) -> bool {
        !self.segments.iter().any(Segment::is_variable)
    }
}
