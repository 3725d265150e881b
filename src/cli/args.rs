//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Seometa page metadata CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: seo.toml)
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a slug and print its metadata bundle as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Content slug (e.g. hello-world)
        slug: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Resolve a slug and print its head tags
    Head {
        /// Content slug (e.g. hello-world)
        slug: String,

        /// HTML page to splice the tags into (before `</head>`)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        template: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    #[command(visible_alias = "c")]
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args() {
        let cli = Cli::try_parse_from(["seometa", "resolve", "hello-world", "--pretty"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("seo.toml"));
        assert!(!cli.verbose);
        match cli.command {
            Commands::Resolve {
                slug,
                pretty,
                output,
            } => {
                assert_eq!(slug, "hello-world");
                assert!(pretty);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_head_args_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "seometa", "head", "post", "-t", "page.html", "-o", "out.html", "-C", "site/seo.toml",
            "--content", "posts", "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("site/seo.toml"));
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        assert!(cli.verbose);
        match cli.command {
            Commands::Head {
                slug,
                template,
                output,
            } => {
                assert_eq!(slug, "post");
                assert_eq!(template, Some(PathBuf::from("page.html")));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_alias() {
        let cli = Cli::try_parse_from(["seometa", "c"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_slug_is_required() {
        assert!(Cli::try_parse_from(["seometa", "resolve"]).is_err());
    }
}
