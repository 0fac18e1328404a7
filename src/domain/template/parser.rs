// Template parser: splits text on `[name]` placeholders

use super::ast::{Segment, Template};

/// Byte range of one `[name]` occurrence, brackets included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpan {
    pub start: usize,
    pub end: usize,
    pub name: String,
}

/// Left-to-right scanner for bracket placeholders.
///
/// A placeholder is `[`, one or more characters other than `]`, then `]`. Matches never
/// overlap. Anything that does not form a placeholder (a lone `[` or `]`, or `[]`) is
/// literal text, so parsing cannot fail.
pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &str) -> Template {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for span in Self::variable_spans(template) {
            segments.push(Segment::Literal(template[last_end..span.start].to_string()));
            segments.push(Segment::Variable(span.name));
            last_end = span.end;
        }

        // Always close with a literal, possibly empty
        segments.push(Segment::Literal(template[last_end..].to_string()));

        Template::new(template.to_string(), segments)
    }

    /// Every placeholder in `template`, in source order.
    ///
    /// Used by the highlighting layer; the text itself is never touched.
    pub fn variable_spans(template: &str) -> Vec<VariableSpan> {
        let mut parser = TemplateParser {
            input: template,
            pos: 0,
        };

        let mut spans = Vec::new();
        while let Some(span) = parser.next_span() {
            spans.push(span);
        }
        spans
    }

    fn next_span(&mut self) -> Option<VariableSpan> {
        loop {
            let open = self.pos + self.input[self.pos..].find('[')?;
            let name_start = open + 1;

            // No closing bracket anywhere after this one means no later match either
            let close = name_start + self.input[name_start..].find(']')?;

            if close == name_start {
                // `[]` is literal, keep scanning from the `]`
                self.pos = name_start;
                continue;
            }

            self.pos = close + 1;
            return Some(VariableSpan {
                start: open,
                end: close + 1,
                name: self.input[name_start..close].to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn var(s: &str) -> Segment {
        Segment::Variable(s.to_string())
    }

    #[test]
    fn test_parse_plain_text_is_single_literal() {
        let template = TemplateParser::parse("Hello, world!");
        assert_eq!(template.segments(), &[lit("Hello, world!")]);
        assert!(template.is_plain());
    }

    #[test]
    fn test_parse_empty_string() {
        let template = TemplateParser::parse("");
        assert_eq!(template.segments(), &[lit("")]);
    }

    #[test]
    fn test_parse_single_variable() {
        let template = TemplateParser::parse("Hello [name]!");
        assert_eq!(template.segments(), &[lit("Hello "), var("name"), lit("!")]);
    }

    #[test]
    fn test_parse_starts_and_ends_with_literal() {
        let template = TemplateParser::parse("[greeting]");
        assert_eq!(template.segments(), &[lit(""), var("greeting"), lit("")]);
    }

    #[test]
    fn test_parse_adjacent_variables_keep_empty_literal() {
        let template = TemplateParser::parse("[first][last]");
        assert_eq!(
            template.segments(),
            &[lit(""), var("first"), lit(""), var("last"), lit("")]
        );
    }

    #[test]
    fn test_parse_unmatched_brackets_are_literal() {
        let template = TemplateParser::parse("a [b and c] d ] e [f");
        assert_eq!(template.segments(), &[lit("a "), var("b and c"), lit(" d ] e [f")]);

        let template = TemplateParser::parse("open [ never closed");
        assert_eq!(template.segments(), &[lit("open [ never closed")]);
    }

    #[test]
    fn test_parse_empty_brackets_are_literal() {
        let template = TemplateParser::parse("list[] and [x]");
        assert_eq!(template.segments(), &[lit("list[] and "), var("x"), lit("")]);
    }

    #[test]
    fn test_parse_nested_open_bracket_is_part_of_name() {
        // No nesting: the name runs to the first closing bracket
        let template = TemplateParser::parse("[a[b]c]");
        assert_eq!(template.segments(), &[lit(""), var("a[b"), lit("c]")]);
    }

    #[test]
    fn test_parse_multibyte_text() {
        let template = TemplateParser::parse("héllo [nom] — ça va?");
        assert_eq!(template.segments(), &[lit("héllo "), var("nom"), lit(" — ça va?")]);
    }

    #[test]
    fn test_parse_keeps_source() {
        let template = TemplateParser::parse("Dear [name],");
        assert_eq!(template.source(), "Dear [name],");
    }

    #[test]
    fn test_round_trip_reconstructs_source() {
        let inputs = [
            "",
            "no brackets",
            "[a]",
            "x [a] y [b] z",
            "[a][b][a]",
            "] [ [] [[x]] ]",
            "tail [",
        ];

        for input in inputs {
            let rebuilt: String = TemplateParser::parse(input)
                .segments()
                .iter()
                .map(|segment| match segment {
                    Segment::Literal(text) => text.clone(),
                    Segment::Variable(name) => format!("[{}]", name),
                })
                .collect();
            assert_eq!(rebuilt, input, "round trip failed for {:?}", input);
        }
    }

    #[test]
    fn test_variable_spans_report_byte_ranges() {
        let spans = TemplateParser::variable_spans("Hi [name], see [item]");
        assert_eq!(
            spans,
            vec![
                VariableSpan { start: 3, end: 9, name: "name".to_string() },
                VariableSpan { start: 15, end: 21, name: "item".to_string() },
            ]
        );
    }

    #[test]
    fn test_variable_spans_empty_for_plain_text() {
        assert!(TemplateParser::variable_spans("nothing [] here").is_empty());
    }
}
