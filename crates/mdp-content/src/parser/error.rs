//! Parse error types for CMS text.

use thiserror::Error;

/// A malformed marker found by `check_template`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `[[name:...]]` where `name` is not a placeholder kind.
    #[error("unknown placeholder kind '{kind}' at {line}:{column}")]
    UnknownKind {
        kind: String,
        line: usize,
        column: usize,
    },

    /// `[[` with no closing `]]` on the same line.
    #[error("unterminated placeholder at {line}:{column}")]
    Unterminated { line: usize, column: usize },
}

impl ParseError {
    /// One-based line and column of the offending `[[`.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::UnknownKind { line, column, .. } | ParseError::Unterminated { line, column } => {
                (*line, *column)
            }
        }
    }
}
