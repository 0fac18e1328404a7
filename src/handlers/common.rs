// View helpers shared across handlers

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::template::{PromptSession, Segment, TemplateParser};

/// One run of prompt text for the highlighting overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPiece {
    pub text: String,
    pub is_variable: bool,
}

/// Split raw content into plain and `[name]` runs, brackets kept.
///
/// Concatenating the pieces gives back `content` unchanged.
pub fn highlight(content: &str) -> Vec<HighlightPiece> {
    let mut pieces = Vec::new();
    let mut last_end = 0;

    for span in TemplateParser::variable_spans(content) {
        if span.start > last_end {
            pieces.push(HighlightPiece {
                text: content[last_end..span.start].to_string(),
                is_variable: false,
            });
        }
        pieces.push(HighlightPiece {
            text: content[span.start..span.end].to_string(),
            is_variable: true,
        });
        last_end = span.end;
    }

    if last_end < content.len() {
        pieces.push(HighlightPiece {
            text: content[last_end..].to_string(),
            is_variable: false,
        });
    }

    pieces
}

/// Everything a client needs after one render or reverse-map cycle
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub segments: Vec<Segment>,
    pub variables: Vec<String>,
    pub values: BTreeMap<String, String>,
    pub preview: String,
    pub export: String,
    pub complete: bool,
}

impl From<&PromptSession> for SessionView {
    fn from(session: &PromptSession) -> Self {
        Self {
            segments: session.template().segments().to_vec(),
            variables: session.variable_names().to_vec(),
            values: session
                .values()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            preview: session.preview(),
            export: session.export_text(),
            complete: session.is_complete(),
        }
    }
}
