//! Miette diagnostic wrapper for placeholder parse errors.

use mdp_content::{ParseError, compute_suggestions};
use mdp_semantics::PlaceholderKind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed placeholder markers.
///
/// Fields are read by the miette derive, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("placeholder error: {message}")]
#[diagnostic(code(mdp::placeholder))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("marker starts here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let offset = byte_offset(content, line, column);
        let (message, help) = match err {
            ParseError::UnknownKind { kind, .. } => {
                let known: Vec<&str> = PlaceholderKind::ALL
                    .into_iter()
                    .map(PlaceholderKind::as_str)
                    .collect();
                let suggestions = compute_suggestions(kind, &known);
                let help = if suggestions.is_empty() {
                    format!("known kinds: {}", known.join(", "))
                } else {
                    format!("did you mean: {}?", suggestions.join(", "))
                };
                (format!("unknown placeholder kind '{kind}'"), help)
            }
            ParseError::Unterminated { .. } => (
                "unterminated placeholder".to_string(),
                "close the marker with `]]` on the same line".to_string(),
            ),
        };

        TemplateDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, 2.min(content.len() - offset)).into(),
            message,
            help: Some(help),
        }
    }
}

/// Convert a one-based line and column to a byte offset, clamped to the
/// content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_line() {
        assert_eq!(byte_offset("Hello [[token:x", 1, 7), 6);
    }

    #[test]
    fn offset_of_later_line() {
        assert_eq!(byte_offset("ab\r\ncd\n[[foo:x]]", 3, 1), 7);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("ab", 4, 10), 2);
    }
}
