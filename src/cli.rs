use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidshelf")]
#[command(author, version, about = "Stream a directory of videos to your browser")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the server and serve videos to the browser
    ///
    /// There is no authentication. Any client that can reach the bind
    /// address can list and stream the catalog and, through
    /// POST /api/rescan, point it at any directory the server can read.
    /// Use --host 127.0.0.1 to keep the server local.
    Serve {
        /// Fixed port, takes precedence over --port and the config file
        port_override: Option<u16>,

        /// Directory to scan for videos
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Host to bind to (default 0.0.0.0, reachable from the network)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Extension to serve (repeatable), e.g. --ext mp4 --ext webm
        #[arg(short, long = "ext")]
        extensions: Vec<String>,

        /// Largest window served per range request, in bytes
        #[arg(long)]
        max_window: Option<u64>,
    },

    /// Scan a directory and print the catalog
    List {
        /// Directory to scan (defaults to the configured root)
        root: Option<PathBuf>,

        /// Extension to include (repeatable)
        #[arg(short, long = "ext")]
        extensions: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}
