//! CLI command implementations.

mod check;
mod dispatch;
mod inject;
mod render;
mod resolve;

use std::path::{Path, PathBuf};

use clap::Args;
use mdp_content::interpreter::{HtmlParser, TextParser, TokenSources};
use mdp_content::{CmsTokens, Labels, LoadError, QuoteOption, RenderSettings, load_json};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::output::CliError;

pub use check::{CheckArgs, run_check};
pub use dispatch::{DispatchArgs, run_dispatch};
pub use inject::{InjectArgs, run_inject};
pub use render::{RenderArgs, run_render};
pub use resolve::{ResolveArgs, run_resolve};

/// Inputs shared by the commands that inject content.
#[derive(Debug, Args)]
pub struct ContentInputs {
    /// Member facts file (JSON object of CMS tokens)
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Labels file (JSON object of key to text)
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Tenant display name
    #[arg(long, env = "MDP_TENANT")]
    pub tenant: Option<String>,

    /// Render settings file (JSON)
    #[arg(long, env = "MDP_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl ContentInputs {
    pub fn load_labels(&self) -> miette::Result<Labels> {
        load_optional(self.labels.as_deref())
    }

    pub fn load_settings(&self) -> miette::Result<RenderSettings> {
        load_optional(self.settings.as_deref())
    }

    /// Build the HTML parser (which wraps the text parser) for these inputs.
    pub fn html_parser(&self, data: Option<QuoteOption>) -> miette::Result<HtmlParser> {
        let cms_tokens: CmsTokens = load_optional(self.tokens.as_deref())?;
        let settings = self.load_settings()?;
        let sources = TokenSources::builder()
            .maybe_tenant_name(self.tenant.clone())
            .cms_tokens(cms_tokens)
            .labels(self.load_labels()?)
            .build();
        Ok(HtmlParser::builder()
            .text(TextParser::from_sources(&sources, &settings))
            .settings(settings)
            .maybe_data(data)
            .build())
    }
}

/// Load a JSON file, reporting failures as diagnostics.
pub fn load<T: DeserializeOwned>(path: &Path) -> miette::Result<T> {
    load_json(path).map_err(|e: LoadError| CliError::from(e).into())
}

/// Load a JSON file if a path was given, else the type's default.
pub fn load_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> miette::Result<T> {
    path.map_or_else(|| Ok(T::default()), load::<T>)
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::Serialize)?;
    println!("{json}");
    Ok(())
}
