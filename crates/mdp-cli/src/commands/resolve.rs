//! Implementation of the `mdp resolve` command.

use std::path::PathBuf;

use clap::Args;
use mdp_content::quote::resolve_path;
use mdp_content::{QuoteOption, Scalar};
use serde::Serialize;

use crate::commands::{load, print_json};

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Quote option tree (JSON)
    #[arg(long)]
    pub quote: PathBuf,

    /// Dotted value path, e.g. fullPension.option1.totalPension
    #[arg(long)]
    pub path: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Debug, Serialize)]
struct ResolveResult<'a> {
    path: &'a str,
    value: Option<Scalar>,
}

/// Run the resolve command. An unresolved path exits with `DATAERR`.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let tree: QuoteOption = load(&args.quote)?;
    let value = resolve_path(&tree, &args.path);
    let code = if value.is_some() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    };

    if args.json {
        print_json(&ResolveResult {
            path: &args.path,
            value,
        })?;
    } else {
        match value {
            Some(value) => println!("{value}"),
            None => eprintln!("no value at '{}'", args.path),
        }
    }
    Ok(code)
}
