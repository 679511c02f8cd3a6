//! Folio - a static site generator for personal portfolio sites.

#![allow(dead_code)]

mod carousel;
mod cli;
mod config;
mod content;
mod core;
mod dom;
mod embed;
mod generator;
mod logger;
mod page;
mod reload;
mod sectionize;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Build { .. } => cli::build::build_all(&config).map(|_| ()),
        Commands::Serve { .. } => serve(&config),
        Commands::Validate {} => cli::validate::validate_site(&config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

/// Bind the server, build in the background, then run the request loop.
fn serve(config: &SiteConfig) -> Result<()> {
    // Bind first so early requests get the loading page during the build
    let bound = cli::serve::bind_server()?;

    if config.serve.watch {
        let ws_port = reload::server::start_ws_server(cli::serve::DEFAULT_WS_PORT)?;
        cli::serve::set_actual_ws_port(ws_port);
        reload::watcher::start_watcher(bound.shutdown_rx())?;
    }

    std::thread::spawn(move || {
        let config = cfg();
        match cli::build::build_site(&config) {
            Ok(_) => {}
            Err(e) => {
                // Keep serving; the watcher rebuilds once the content is fixed
                log!("build"; "initial build failed: {:#}", e);
                reload::server::broadcast(&reload::ReloadMessage::Error {
                    detail: format!("{e:#}"),
                });
            }
        }
        core::set_serving();
    });

    bound.run()
}
