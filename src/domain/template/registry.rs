// Variable name extraction and duplicate detection

use std::collections::HashSet;

use super::ast::Segment;

/// Unique variable names, first occurrence wins the position
pub fn extract_variable_names(segments: &[Segment]) -> Vec<String> {
    let mut seen = HashSet::new();
    all_variable_occurrences(segments)
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Every variable occurrence in source order, repeats included
pub fn all_variable_occurrences(segments: &[Segment]) -> Vec<&str> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Names that occur more than once, each reported once in first-repeat order
pub fn duplicate_variable_names(segments: &[Segment]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for name in all_variable_occurrences(segments) {
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name.to_string());
        }
    }

    duplicates
}

pub fn has_duplicate_variables(segments: &[Segment]) -> bool {
    !duplicate_variable_names(segments).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::parser::TemplateParser;

    #[test]
    fn test_extract_preserves_first_occurrence_order() {
        let template = TemplateParser::parse("[b] [a] [c] [a] [b]");
        assert_eq!(extract_variable_names(template.segments()), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_extract_collapses_three_or_more_repeats() {
        let template = TemplateParser::parse("[x][x][x][x]");
        assert_eq!(extract_variable_names(template.segments()), vec!["x"]);
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let template = TemplateParser::parse("[Name] [name]");
        assert_eq!(extract_variable_names(template.segments()), vec!["Name", "name"]);
    }

    #[test]
    fn test_extract_empty_for_plain_text() {
        let template = TemplateParser::parse("Hello, world!");
        assert!(extract_variable_names(template.segments()).is_empty());
    }

    #[test]
    fn test_duplicates_flagged_even_though_names_collapse() {
        let template = TemplateParser::parse("[x] and [x]");
        assert_eq!(extract_variable_names(template.segments()), vec!["x"]);
        assert!(has_duplicate_variables(template.segments()));
        assert_eq!(duplicate_variable_names(template.segments()), vec!["x"]);
    }

    #[test]
    fn test_duplicates_reported_once_each() {
        let template = TemplateParser::parse("[a][b][a][a][b][c]");
        assert_eq!(duplicate_variable_names(template.segments()), vec!["a", "b"]);
    }

    #[test]
    fn test_no_duplicates_for_distinct_names() {
        let template = TemplateParser::parse("Hello [name], welcome to [platform]!");
        assert!(!has_duplicate_variables(template.segments()));
        assert_eq!(all_variable_occurrences(template.segments()), vec!["name", "platform"]);
    }
}
