//! Lumen - path-to-metadata resolution for the Light SaaS landing site.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod page;
mod render;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::LumenConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` must work before any config exists
    if let Commands::Init { force, dry } = &cli.command {
        return cli::init::run_init(&cli.config, *force, *dry);
    }

    let config = LumenConfig::load(&cli.config)?;
    let site = &config.site;

    match &cli.command {
        Commands::Resolve {
            path,
            entity,
            pretty,
        } => cli::page::run_resolve(path, entity, *pretty, site),
        Commands::Head {
            path,
            entity,
            jsonld,
        } => cli::page::run_head(path, entity, *jsonld, site),
        Commands::Apply {
            path,
            html,
            entity,
            output,
        } => cli::page::run_apply(path, html, entity, output.as_deref(), site),
        Commands::Schema { kind, payload, raw } => {
            cli::schema::run_schema(kind, payload.as_deref(), *raw, site)
        }
        Commands::Sitemap { output } => cli::sitemap::run_sitemap(&config, output.as_deref()),
        Commands::Init { .. } => Ok(()),
    }
}
