//! Implementation of the `mdp render` command.

use std::path::PathBuf;

use clap::Args;
use mdp_content::quote::render_summary;
use mdp_content::{Labels, QuoteOption, RenderSettings, SummaryItem};

use crate::commands::{load, load_optional, print_json};
use crate::output::table::format_summary_table;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Quote option tree (JSON). Without it, authored values are shown as-is.
    #[arg(long)]
    pub quote: Option<PathBuf>,

    /// Summary items (JSON array)
    #[arg(long)]
    pub summary: PathBuf,

    /// Labels file (JSON object of key to text)
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Render settings file (JSON)
    #[arg(long, env = "MDP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let items: Vec<SummaryItem> = load(&args.summary)?;
    let tree = args.quote.as_deref().map(load::<QuoteOption>).transpose()?;
    let labels: Labels = load_optional(args.labels.as_deref())?;
    let settings: RenderSettings = load_optional(args.settings.as_deref())?;

    let rendered = render_summary(&items, &labels, tree.as_ref(), &settings);

    if args.json {
        print_json(&rendered)?;
    } else {
        println!("{}", format_summary_table(&rendered, &settings.na_symbol));
    }
    Ok(exitcode::OK)
}
