//! CMS text parser using winnow.
//!
//! Handles:
//! - Literal text runs
//! - `[[kind:argument]]` markers whose kind is a known `PlaceholderKind`
//! - Stray brackets, unknown kinds and unterminated markers (kept literal)

use mdp_semantics::{PlaceholderKind, resolve_placeholder_kind};
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::ast::*;
use super::error::ParseError;

/// Parse CMS text into segments.
///
/// Never fails: text that is not a well-formed marker is literal.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse CMS text, rejecting markers that are malformed.
///
/// Reports the first `[[` that either has no closing `]]` on its line or
/// names an unknown placeholder kind.
pub fn check_template(input: &str) -> Result<Template, ParseError> {
    let template = parse_template(input);
    let mut offset = 0;
    for segment in &template.segments {
        let source = segment.source();
        if let Segment::Literal(text) = segment {
            check_literal(input, offset, text)?;
        }
        offset += source.len();
    }
    Ok(template)
}

fn check_literal(input: &str, start: usize, text: &str) -> Result<(), ParseError> {
    for (index, _) in text.match_indices("[[") {
        let (line, column) = calculate_position(input, start + index);
        let rest = text[index + 2..].lines().next().unwrap_or_default();
        let Some(close) = rest.find("]]") else {
            return Err(ParseError::Unterminated { line, column });
        };
        if let Some((kind, _)) = rest[..close].split_once(':') {
            if resolve_placeholder_kind(kind).is_none() {
                return Err(ParseError::UnknownKind {
                    kind: kind.to_string(),
                    line,
                    column,
                });
            }
        }
    }
    Ok(())
}

/// Calculate line and column from the original input and a byte offset.
fn calculate_position(original: &str, consumed: usize) -> (usize, usize) {
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, open_bracket)).parse_next(input)
}

/// Parse `[[kind:argument]]`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("[[", (placeholder_kind, ':', argument), "]]")
        .map(|(kind, _, argument)| Segment::Placeholder {
            kind,
            argument: argument.to_string(),
        })
        .parse_next(input)
}

fn placeholder_kind(input: &mut &str) -> ModalResult<PlaceholderKind> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-')
        .verify_map(resolve_placeholder_kind)
        .parse_next(input)
}

/// Arguments run to the closing brackets and never span lines.
fn argument<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != '[' && c != ']' && c != '\n').parse_next(input)
}

/// Text up to the next `[`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '[')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// A `[` that did not open a placeholder.
fn open_bracket(input: &mut &str) -> ModalResult<Segment> {
    '['.value(Segment::Literal("[".to_string()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_lines_and_columns() {
        assert_eq!(calculate_position("abc", 0), (1, 1));
        assert_eq!(calculate_position("abc", 2), (1, 3));
        assert_eq!(calculate_position("a\nbc", 3), (2, 2));
    }

    #[test]
    fn merge_joins_adjacent_literals() {
        let merged = merge_literals(vec![
            Segment::Literal("a".into()),
            Segment::Literal("[".into()),
            Segment::Literal("b".into()),
        ]);
        assert_eq!(merged, vec![Segment::Literal("a[b".into())]);
    }
}
