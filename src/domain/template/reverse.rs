// Recover variable values from an edited preview

use super::ast::Segment;
use super::renderer::VariableValues;

/// Map a hand-edited preview back onto per-variable values.
///
/// Each name is resolved on its own: take the literals on either side of its first
/// occurrence, find the leading literal from the start of `edited`, then the trailing
/// literal after it, and the text between them is the value. An empty trailing literal
/// runs to the end of the text. A missing anchor or an empty span yields `""`.
///
/// Anchors are not threaded through the string, so repeated or empty literals can pick
/// the wrong span. Callers depend on exactly this behaviour.
pub fn reverse_map(segments: &[Segment], edited: &str, variable_names: &[String]) -> VariableValues {
    variable_names
        .iter()
        .map(|name| {
            let value = recover_value(segments, edited, name).unwrap_or_default();
            (name.clone(), value.to_string())
        })
        .collect()
}

fn recover_value<'e>(segments: &[Segment], edited: &'e str, name: &str) -> Option<&'e str> {
    let index = segments
        .iter()
        .position(|segment| matches!(segment, Segment::Variable(v) if v == name))?;

    let before = index
        .checked_sub(1)
        .and_then(|i| segments.get(i))
        .map(Segment::value)
        .unwrap_or("");
    let after = segments.get(index + 1).map(Segment::value).unwrap_or("");

    let start = edited.find(before)? + before.len();
    let end = if after.is_empty() {
        edited.len()
    } else {
        start + edited[start..].find(after)?
    };

    (end > start).then(|| &edited[start..end])
}
