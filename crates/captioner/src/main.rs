//! Captioner CLI - browse image folders and manage sidecar captions.
//!
//! Captioner serves a small local web UI that lists the images of a folder,
//! shows the caption stored next to each one, asks a vision API for new
//! captions, and saves or deletes the caption files.
//!
//! # Usage
//!
//! ```bash
//! # Start the web UI on http://127.0.0.1:8000
//! captioner serve
//!
//! # List a folder as JSON
//! captioner scan ./photos --pretty
//!
//! # Caption one image and write photos/beach.txt
//! captioner caption ./photos/beach.jpg --save
//!
//! # View configuration
//! captioner config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;
mod server;

/// Captioner - browse image folders and manage sidecar captions.
#[derive(Parser, Debug)]
#[command(name = "captioner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "CAPTIONER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web UI and JSON API
    Serve(cli::serve::ServeArgs),

    /// List the images of a folder with their captions
    Scan(cli::scan::ScanArgs),

    /// Generate a caption for one image
    Caption(cli::caption::CaptionArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let loaded = match &cli.config {
        Some(path) => captioner_core::Config::load_from(path),
        None => captioner_core::Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) if cli.config.is_some() => return Err(e.into()),
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `captioner config path`."
            );
            captioner_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Captioner v{}", captioner_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Scan(args) => cli::scan::execute(args, config).await,
        Commands::Caption(args) => cli::caption::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config, cli.config).await,
    }
}
