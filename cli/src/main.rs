//! # pageload CLI
//!
//! Command-line host for page-loader: it declares the mount point, loads page
//! fragments into it and reports what was mounted.
//!
//! ## Usage
//!
//! - `pageload home` - Load a single page
//! - `pageload --concurrent home about` - Issue several loads at once
//! - `pageload view-models` - Show the view-models components are bound to
//! - `pageload config` - Show the resolved configuration

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{config_command, load_command, view_models_command};
use config::CliConfigLoader;

/// pageload - fetch a page fragment, inject it and bind it to view-models
#[derive(Parser)]
#[command(name = "pageload")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch page fragments, inject them into a mount point and bind them")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page server base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Path prefix override (default: /pages)
    #[arg(long)]
    path_prefix: Option<String>,

    /// JSON file with view-models to bind instead of the built-in ones
    #[arg(long)]
    view_models: Option<String>,

    /// Remove scripts and inline event handlers before injection
    #[arg(long)]
    strip_scripts: bool,

    /// Apply every response as it resolves instead of only the latest request
    #[arg(long)]
    last_response_wins: bool,

    /// Issue all page loads at once
    #[arg(long)]
    concurrent: bool,

    /// Print the load report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Pages to load (if provided, runs the load command)
    pages: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one or more pages
    Load {
        /// Pages to load, in order
        #[arg(required = true)]
        pages: Vec<String>,
    },

    /// Show the view-models as JSON
    ViewModels,

    /// Show the resolved configuration
    Config,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new()
        .with_strip_scripts(cli.strip_scripts)
        .with_last_response_wins(cli.last_response_wins);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(prefix) = &cli.path_prefix {
        loader = loader.with_path_prefix_override(prefix.clone());
    }

    if let Some(view_models) = &cli.view_models {
        loader = loader.with_view_models_override(view_models.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    page_loader_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match (cli.pages.is_empty(), cli.command) {
        // Pages given directly
        (false, None) => load_command(cli.pages, config_loader, cli.concurrent, cli.json).await,
        // Pages given together with a subcommand is an error
        (false, Some(_)) => {
            tracing::error!("Error: Cannot specify both pages and a subcommand");
            std::process::exit(1);
        }
        (true, Some(Commands::Load { pages })) => {
            load_command(pages, config_loader, cli.concurrent, cli.json).await
        }
        (true, Some(Commands::ViewModels)) => view_models_command(config_loader).await,
        (true, Some(Commands::Config)) => config_command(config_loader).await,
        (true, None) => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
