//! Implementation of the `mdp inject` command.

use std::path::PathBuf;

use clap::Args;
use mdp_content::interpreter::inject;
use mdp_content::{ContentNode, InjectWarning, QuoteOption};
use serde_json::Value as JsonValue;

use crate::commands::{ContentInputs, load, print_json};
use crate::output::print_warnings;

/// Arguments for the inject command.
#[derive(Debug, Args)]
pub struct InjectArgs {
    /// CMS content tree (JSON)
    #[arg(long)]
    pub content: PathBuf,

    #[command(flatten)]
    pub inputs: ContentInputs,

    /// Apply the HTML rules (directive spans, data bindings, empty-element cleanup)
    #[arg(long)]
    pub html: bool,

    /// Quote option tree for data bindings (JSON, implies --html)
    #[arg(long)]
    pub quote: Option<PathBuf>,

    /// Exit with DATAERR when any reference is unresolved
    #[arg(long)]
    pub strict: bool,
}

/// Run the inject command.
pub fn run_inject(args: InjectArgs) -> miette::Result<i32> {
    let content: ContentNode = load(&args.content)?;
    let data = args.quote.as_deref().map(load::<QuoteOption>).transpose()?;
    let html_rules = args.html || data.is_some();
    let html = args.inputs.html_parser(data)?;

    let mut warnings: Vec<InjectWarning> = Vec::new();
    for text in content.texts() {
        let (_, found) = if html_rules {
            html.parse_with_warnings(text)
        } else {
            html.text_parser().parse_with_warnings(text)
        };
        for warning in found {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
    }

    let injected = if html_rules {
        inject(content, &html)
    } else {
        inject(content, html.text_parser())
    };
    print_json(&JsonValue::from(injected))?;
    print_warnings(&warnings);

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
