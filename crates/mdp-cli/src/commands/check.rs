//! Implementation of the `mdp check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use mdp_content::{
    ContentNode, InjectWarning, Labels, LoadError, Segment, check_template, compute_suggestions,
    parse_template,
};
use mdp_semantics::{PlaceholderKind, accepted_token_names, resolve_token};
use miette::Report;
use tracing::debug;

use crate::commands::{load, print_json};
use crate::output::table::{FileReport, format_check_table};
use crate::output::{CliError, TemplateDiagnostic, print_warnings};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files to check: plain CMS text, or JSON content trees (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Labels file; when given, label references are checked against it
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command. Malformed markers exit with `DATAERR`; unknown
/// names are warnings.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let labels = args.labels.as_deref().map(load::<Labels>).transpose()?;

    let mut reports = Vec::with_capacity(args.files.len());
    let mut diagnostics = Vec::new();
    let mut warnings = Vec::new();
    for path in &args.files {
        let (report, file_diagnostics, file_warnings) = check_file(path, labels.as_ref())?;
        reports.push(report);
        diagnostics.extend(file_diagnostics);
        warnings.extend(file_warnings);
    }

    let failed = reports.iter().any(|report| !report.errors.is_empty());
    if args.json {
        print_json(&reports)?;
    } else {
        for diagnostic in diagnostics {
            eprintln!("{:?}", Report::new(diagnostic));
        }
        print_warnings(&warnings);
        println!("{}", format_check_table(&reports));
    }

    Ok(if failed {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}

fn check_file(
    path: &Path,
    labels: Option<&Labels>,
) -> miette::Result<(FileReport, Vec<TemplateDiagnostic>, Vec<InjectWarning>)> {
    let content = read_to_string(path).map_err(|source| {
        CliError::from(LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let texts = file_texts(path, &content);
    debug!(path = %path.display(), texts = texts.len(), "checking file");

    let mut report = FileReport {
        path: path.display().to_string(),
        texts: texts.len(),
        ..FileReport::default()
    };
    let mut diagnostics = Vec::new();
    let mut warnings = Vec::new();

    for (index, text) in texts.iter().enumerate() {
        if let Err(err) = check_template(text) {
            report.errors.push(err.to_string());
            let name = if texts.len() == 1 {
                report.path.clone()
            } else {
                format!("{} (text {})", report.path, index + 1)
            };
            diagnostics.push(TemplateDiagnostic::from_parse_error(&name, text, &err));
        }

        for segment in parse_template(text).segments {
            let Segment::Placeholder { kind, argument } = segment else {
                continue;
            };
            *report.counts.entry(kind.as_str()).or_default() += 1;
            if let Some(warning) = name_warning(kind, &argument, labels) {
                if !warnings.contains(&warning) {
                    report.warnings.push(warning.to_string());
                    warnings.push(warning);
                }
            }
        }
    }

    Ok((report, diagnostics, warnings))
}

/// JSON files are checked leaf by leaf; anything else is one text.
fn file_texts(path: &Path, content: &str) -> Vec<String> {
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    if is_json {
        match serde_json::from_str::<ContentNode>(content) {
            Ok(node) => return node.texts().into_iter().map(str::to_string).collect(),
            Err(e) => debug!(error = %e, "not a JSON content tree, checking as text"),
        }
    }
    vec![content.to_string()]
}

fn name_warning(kind: PlaceholderKind, argument: &str, labels: Option<&Labels>) -> Option<InjectWarning> {
    match kind {
        PlaceholderKind::Token if resolve_token(argument).is_none() => {
            Some(InjectWarning::UnknownToken {
                name: argument.to_string(),
                suggestions: compute_suggestions(argument, &accepted_token_names()),
            })
        }
        PlaceholderKind::Label => {
            let labels = labels?;
            if labels.get(argument).is_some() {
                return None;
            }
            let keys: Vec<&str> = labels.keys().collect();
            Some(InjectWarning::UnknownLabel {
                key: argument.to_string(),
                suggestions: compute_suggestions(argument, &keys),
            })
        }
        _ => None,
    }
}
