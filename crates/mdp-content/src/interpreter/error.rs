//! Error and warning types for loading and injection.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading CMS or backend JSON from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A reference that could not be substituted during injection.
///
/// Injection never fails; unresolved references are written back as their
/// bracket literal and reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectWarning {
    /// `[[token:name]]` where `name` is not a token.
    UnknownToken {
        name: String,
        suggestions: Vec<String>,
    },

    /// `[[token:name]]` for a known token with no value for this member.
    MissingToken { name: String },

    /// `[[label:key]]` with no authored label.
    UnknownLabel {
        key: String,
        suggestions: Vec<String>,
    },
}

impl Display for InjectWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InjectWarning::UnknownToken { name, suggestions } => {
                write!(f, "unknown token '{name}'")?;
                write_suggestions(f, suggestions)
            }
            InjectWarning::MissingToken { name } => {
                write!(f, "token '{name}' has no value")
            }
            InjectWarning::UnknownLabel { key, suggestions } => {
                write!(f, "unknown label '{key}'")?;
                write_suggestions(f, suggestions)
            }
        }
    }
}

fn write_suggestions(f: &mut Formatter<'_>, suggestions: &[String]) -> FmtResult {
    if suggestions.is_empty() {
        Ok(())
    } else {
        write!(f, "; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three names close to `name`, closest first.
///
/// Names of three characters or fewer allow one edit; longer names allow two.
pub fn compute_suggestions<S: AsRef<str>>(name: &str, available: &[S]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| AsRef::<str>::as_ref(candidate))
        .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
