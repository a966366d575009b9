//! Terminal output: diagnostics, tables and warnings.

pub mod diagnostic;
pub mod table;

use mdp_content::{InjectWarning, LoadError};
use miette::Diagnostic;
use owo_colors::{OwoColorize, Stream};
use thiserror::Error;

pub use diagnostic::TemplateDiagnostic;

/// Errors that stop a command.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(mdp::load), help("check the path and that the file holds the expected JSON"))]
    Load(#[from] LoadError),

    #[error("failed to serialize output: {0}")]
    #[diagnostic(code(mdp::output))]
    Serialize(#[source] serde_json::Error),
}

impl CliError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Load(LoadError::Io { .. }) => exitcode::NOINPUT,
            CliError::Load(LoadError::Json { .. }) => exitcode::DATAERR,
            CliError::Serialize(_) => exitcode::SOFTWARE,
        }
    }
}

/// Print injection warnings to stderr.
pub fn print_warnings(warnings: &[InjectWarning]) {
    for warning in warnings {
        eprintln!(
            "{} {warning}",
            "warning:".if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }
}
