//! nbsync CLI - notebook to documentation page sync.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "nbsync")]
#[command(about = "Convert notebooks into MDX pages and keep the docs navigation in sync")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to nbsync.toml config file
    #[arg(short, long, default_value = "nbsync.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert notebooks and update the navigation manifest
    Sync {
        /// Project root the configured paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Report what a sync would do without writing anything
    Check {
        /// Project root the configured paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Initialize notebook syncing in the current project
    Init {
        /// Skip interactive prompts, use defaults
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command; a bare `nbsync` runs a full sync
    match cli.command {
        Some(Commands::Sync { root }) => {
            commands::sync::run(&cli.config, root)?;
        }
        Some(Commands::Check { root }) => {
            commands::check::run(&cli.config, root)?;
        }
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.config, yes)?;
        }
        None => {
            commands::sync::run(&cli.config, None)?;
        }
    }

    Ok(())
}
