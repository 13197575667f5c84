//! Twitterverse CLI - Command-line interface for Twitterverse
//!
//! This is the main entry point for users interacting with Twitterverse.
//! It provides commands for running queries against a social graph data
//! file and for inspecting the graph.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twitterverse_core::{Format, SortKey};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tverse")]
#[command(author = "Twitterverse Contributors")]
#[command(version)]
#[command(about = "Query a Twitterverse social graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Twitterverse in a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default data file for queries run from this directory
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Run a query file against a data file
    Run {
        /// Query file
        query: PathBuf,

        /// Data file (defaults to the one in .twitterverse/config.json)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Override the query's sort key (username, name, popularity)
        #[arg(long)]
        sort_by: Option<SortKey>,

        /// Override the query's format (short, long)
        #[arg(long)]
        format: Option<Format>,
    },

    /// Export the graph to JSON
    Export {
        /// Data file
        data: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show graph statistics
    Stats {
        /// Data file
        data: PathBuf,

        /// Number of most popular users to list
        #[arg(short, long, default_value = "5")]
        top: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Init { path, data } => commands::init(&path, data),
        Commands::Run {
            query,
            data,
            sort_by,
            format,
        } => commands::run(&query, data.as_deref(), sort_by, format),
        Commands::Export { data, output } => commands::export(&data, output.as_deref()),
        Commands::Stats { data, top } => commands::stats(&data, top),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
