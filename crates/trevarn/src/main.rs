//! Trevarn CLI - serves the bilingual brand-guidelines site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use trevarn_catalog::Language;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "trevarn")]
#[command(about = "Serve the bilingual Trevarn brand-guidelines site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to trevarn.toml config file
    #[arg(short, long, default_value = "trevarn.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the index pages and site files
    Serve {
        /// Port to listen on (defaults to config or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Site directory (defaults to config or ".")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Cache scans until the directory changes
        #[arg(long)]
        cache: bool,

        /// Open the index in a browser
        #[arg(long)]
        open: bool,
    },

    /// Write a default trevarn.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the catalog as the index would show it
    List {
        /// Language to list (en or fr)
        #[arg(short, long, default_value = "en")]
        lang: Language,

        /// Site directory (defaults to config or ".")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report documents whose French counterpart is missing
    Check {
        /// Site directory (defaults to config or ".")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Serve {
            port,
            host,
            dir,
            cache,
            open,
        } => {
            let file_config = config::load_config(&cli.config)?;
            let options = commands::serve::ServeOptions {
                port,
                host,
                dir,
                cache,
                open,
            };
            commands::serve::run(file_config, options).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::List { lang, dir, json } => {
            let file_config = config::load_config(&cli.config)?;
            commands::list::run(file_config, lang, dir, json).await?;
        }
        Commands::Check { dir } => {
            let file_config = config::load_config(&cli.config)?;
            commands::check::run(file_config, dir).await?;
        }
    }

    Ok(())
}
