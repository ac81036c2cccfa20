//! Lanes CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lanes")]
#[command(about = "Commit graph lane layout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a commit file and print the graph as JSON
    Layout {
        /// JSON file with commits, most recent first
        commits: PathBuf,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print draw commands for a window of rows as JSON
    Frame {
        /// JSON file with commits, most recent first
        commits: PathBuf,

        /// First visible row
        #[arg(short, long, default_value = "0")]
        start: usize,

        /// Number of visible rows (defaults to the whole history)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Grid and style settings (defaults to lanes.toml next to the commit file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lanes={log_level},lanes_core={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Layout { commits, pretty } => commands::layout(commits, pretty),
        Commands::Frame {
            commits,
            start,
            rows,
            config,
            pretty,
        } => commands::frame(commits, start, rows, config, pretty),
        Commands::Version => {
            println!("Lanes v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
