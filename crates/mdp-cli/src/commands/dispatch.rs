//! Implementation of the `mdp dispatch` command.

use std::path::PathBuf;

use clap::Args;
use mdp_content::{CmsBlock, PageContext, QuoteOption, dispatch_page};
use serde::Deserialize;

use crate::commands::{ContentInputs, load, print_json};

/// Arguments for the dispatch command.
#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// Page file: a JSON array of blocks, or an object with a `blocks` array
    #[arg(long)]
    pub page: PathBuf,

    /// Quote option tree (JSON)
    #[arg(long)]
    pub quote: Option<PathBuf>,

    #[command(flatten)]
    pub inputs: ContentInputs,
}

/// Both page shapes the CMS exports.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageFile {
    Blocks(Vec<CmsBlock>),
    Page { blocks: Vec<CmsBlock> },
}

impl PageFile {
    fn into_blocks(self) -> Vec<CmsBlock> {
        match self {
            PageFile::Blocks(blocks) | PageFile::Page { blocks } => blocks,
        }
    }
}

/// Run the dispatch command.
pub fn run_dispatch(args: DispatchArgs) -> miette::Result<i32> {
    let blocks = load::<PageFile>(&args.page)?.into_blocks();
    let quote = args.quote.as_deref().map(load::<QuoteOption>).transpose()?;
    let labels = args.inputs.load_labels()?;
    let html = args.inputs.html_parser(quote.clone())?;

    let page = PageContext::builder()
        .html(&html)
        .labels(&labels)
        .maybe_quote(quote.as_ref())
        .build();
    print_json(&dispatch_page(&blocks, &page))?;
    Ok(exitcode::OK)
}
