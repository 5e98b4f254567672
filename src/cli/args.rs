//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Routing and deployment tools for the Bible reader app
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Bundler output directory (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: biblia.toml)
    #[arg(short = 'C', long, global = true, default_value = "biblia.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the public site URL; its path becomes the deploy subpath.
    ///
    /// Example: biblia base --site-url "https://user.github.io/projeto_biblia"
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

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
    /// List the route table in match order
    #[command(visible_alias = "r")]
    Routes,

    /// Resolve navigation paths through the route table
    #[command(visible_alias = "x")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the deploy target and base path for the current environment
    #[command(visible_alias = "b")]
    Base {
        /// Print only the base path
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build the URL of a named route under the base path
    #[command(visible_alias = "h")]
    Href {
        /// Route name (home, books, chapters, reader)
        name: String,

        /// Route parameters as KEY=VALUE
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Serve the bundled app with history-mode routing
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Serve under the deploy base path instead of `/`
        #[arg(short = 'B', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        respect_base: Option<bool>,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Paths relative to the app root (e.g. /book/genesis/chapter/1).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Treat paths as browser URLs that include the base path
    #[arg(short = 'b', long)]
    pub with_base: bool,

    /// Output JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

/// Parse a `KEY=VALUE` route parameter.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
