//! biblia - routing, deploy base path and dev server for the Bible reader app.

mod cli;
mod config;
mod core;
mod deploy;
mod logger;
mod router;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use deploy::{Deployment, ProcessEnv};
use router::{RouteTable, Router};
use std::sync::Arc;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    // Detected once; later environment changes are not observed.
    let deployment = Deployment::detect(&ProcessEnv, &config.deploy.subpath);
    debug!("deploy"; "{} -> {}", deployment.target, deployment.base);

    let table = RouteTable::standard()?;

    match &cli.command {
        Commands::Routes => cli::routes::list_routes(&table),
        Commands::Resolve { args } => {
            cli::resolve::run_resolve(args, &Router::new(table, &deployment.base))
        }
        Commands::Base { quiet } => cli::base::print_base(&deployment, *quiet),
        Commands::Href { name, params } => {
            cli::href::print_href(&Router::new(table, &deployment.base), name, params)
        }
        Commands::Serve { .. } => {
            let base = if config.serve.respect_base {
                deployment.base.as_str()
            } else {
                "/"
            };
            let router = Arc::new(Router::new(table, base));
            cli::serve::serve_site(Arc::new(config), router)
        }
    }
}
