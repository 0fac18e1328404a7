// Template module for bracket-placeholder prompt templates
//
// This module parses prompt text into literal and variable segments, renders previews
// from typed values, and maps an edited preview back onto those values.

mod ast;
mod parser;
mod registry;
mod renderer;
mod reverse;
mod session;

pub use ast::{Segment, Template};
pub use parser::{TemplateParser, VariableSpan};
pub use registry::{
    all_variable_occurrences, duplicate_variable_names, extract_variable_names,
    has_duplicate_variables,
};
pub use renderer::{export_text, render, VariableValues};
pub use reverse::reverse_map;
pub use session::PromptSession;
