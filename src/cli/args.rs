//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Page metadata resolver for the Light SaaS site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: lumen.toml)
    #[arg(short = 'C', long, global = true, default_value = "lumen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print composed metadata for a path as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Request path, e.g. /blog/my-post
        path: String,

        #[command(flatten)]
        entity: EntityArgs,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print static <head> markup for a path
    #[command(visible_alias = "h")]
    Head {
        /// Request path, e.g. /pricing
        path: String,

        #[command(flatten)]
        entity: EntityArgs,

        /// Also emit the page's JSON-LD document (articles and products)
        #[arg(short = 'j', long)]
        jsonld: bool,
    },

    /// Apply metadata for a path to the <head> of an HTML file
    #[command(visible_alias = "a")]
    Apply {
        /// Request path, e.g. /products/pro-plan
        path: String,

        /// HTML file to update
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        html: PathBuf,

        #[command(flatten)]
        entity: EntityArgs,

        /// Write the result here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print a JSON-LD structured data document
    Schema {
        /// Document kind: software, organization, faq, breadcrumb, product, article
        kind: String,

        /// Payload replacing the sample content: inline JSON or @file
        #[arg(short, long)]
        payload: Option<String>,

        /// Print bare JSON instead of a <script> element
        #[arg(long)]
        raw: bool,
    },

    /// Write sitemap.xml for the indexable pages
    Sitemap {
        /// Output file (default: [sitemap] path from config)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Write a default lumen.toml
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Entity data for dynamic pages.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EntityArgs {
    /// Entity data (blog post, product): inline JSON object or @file
    #[arg(short, long)]
    pub entity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_with_entity() {
        let cli = Cli::parse_from([
            "lumen",
            "resolve",
            "/products/pro-plan",
            "--entity",
            r#"{"name":"Pro Plan"}"#,
        ]);
        match cli.command {
            Commands::Resolve { path, entity, pretty } => {
                assert_eq!(path, "/products/pro-plan");
                assert_eq!(entity.entity.as_deref(), Some(r#"{"name":"Pro Plan"}"#));
                assert!(!pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("lumen.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lumen", "sitemap", "-C", "site/lumen.toml", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/lumen.toml"));
        assert!(matches!(cli.command, Commands::Sitemap { output: None }));
    }

    #[test]
    fn test_apply_requires_html() {
        assert!(Cli::try_parse_from(["lumen", "apply", "/"]).is_err());
    }
}
