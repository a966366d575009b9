//! Member portal content CLI entry point.
//!
//! Provides command-line tools for CMS content and quote trees:
//! - `mdp resolve` - Resolve a value path against a quote tree
//! - `mdp render` - Render summary items against a quote tree
//! - `mdp inject` - Substitute tokens and labels in a content tree
//! - `mdp check` - Validate placeholder markers in CMS text
//! - `mdp dispatch` - Build render instructions for a page of blocks

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, DispatchArgs, InjectArgs, RenderArgs, ResolveArgs, run_check, run_dispatch,
    run_inject, run_render, run_resolve,
};
use output::CliError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Member portal content tools.
#[derive(Debug, Parser)]
#[command(name = "mdp")]
#[command(about = "Member portal content tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log more detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a dotted value path against a quote tree
    Resolve(ResolveArgs),
    /// Render summary items against a quote tree
    Render(RenderArgs),
    /// Substitute tokens and labels in a CMS content tree
    Inject(InjectArgs),
    /// Check placeholder markers in CMS text or JSON files
    Check(CheckArgs),
    /// Build render instructions for a page of CMS blocks
    Dispatch(DispatchArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    debug!(command = ?cli.command, "running");
    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Render(args) => run_render(args),
        Commands::Inject(args) => run_inject(args),
        Commands::Check(args) => run_check(args),
        Commands::Dispatch(args) => run_dispatch(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            let code = e
                .downcast_ref::<CliError>()
                .map_or(exitcode::SOFTWARE, CliError::exit_code);
            eprintln!("{e:?}");
            exit(code);
        }
    }
}
