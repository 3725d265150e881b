//! Seometa - resolve page content into search and social-sharing metadata.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use seometa::{config::SeoConfig, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut config = SeoConfig::load(&cli.config)?;
    if let Some(dir) = &cli.content {
        config.content.dir = dir.clone();
    }

    match &cli.command {
        Commands::Resolve {
            slug,
            pretty,
            output,
        } => cli::resolve::run(&config, slug, *pretty, output.as_deref()).await,
        Commands::Head {
            slug,
            template,
            output,
        } => cli::head::run(&config, slug, template.as_deref(), output.as_deref()).await,
        Commands::Check => cli::check::run(&config),
    }
}
