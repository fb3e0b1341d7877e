mod cli;

use vidshelf::{config, server};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use vidshelf_catalog::Catalog;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidshelf=trace,vidshelf_catalog=trace,tower_http=debug".to_string()
        } else {
            "vidshelf=info,vidshelf_catalog=info,tower_http=info".to_string()
        }
    });

    // Logs go to stderr so `list --json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve {
            port_override,
            root,
            host,
            port,
            extensions,
            max_window,
        } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;

            // CLI values override the config file
            if let Some(root) = root {
                config.library.root = root;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port_override.or(port) {
                config.server.port = port;
            }
            if !extensions.is_empty() {
                config.library.extensions = extensions;
            }
            if let Some(max_window) = max_window {
                config.streaming.max_window_bytes = max_window;
            }
            config::validate_config(&config)?;

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(config))
        }
        Commands::List {
            root,
            extensions,
            json,
        } => list_catalog(cli.config.as_deref(), root, extensions, json),
        Commands::Version => {
            println!("vidshelf {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn start_server(config: config::Config) -> Result<()> {
    let extensions = config::extension_set(&config)?;
    let root = config.library.root.clone();

    tracing::info!("Scanning {:?} for {:?}", root, extensions.iter().collect::<Vec<_>>());

    // A catalog that cannot be built stops startup instead of serving nothing
    let catalog = tokio::task::spawn_blocking(move || Catalog::build(&root, &extensions))
        .await?
        .context("Failed to build video catalog")?;

    if catalog.is_empty() {
        tracing::warn!("No videos found under {:?}", catalog.root());
    }

    tracing::info!(
        "Serving {} videos on http://{}:{}",
        catalog.len(),
        config.server.host,
        config.server.port
    );

    server::start_server(config, catalog).await
}

fn list_catalog(
    config_path: Option<&Path>,
    root: Option<PathBuf>,
    extensions: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(root) = root {
        config.library.root = root;
    }
    if !extensions.is_empty() {
        config.library.extensions = extensions;
    }

    let extension_set = config::extension_set(&config)?;
    let catalog = Catalog::build(&config.library.root, &extension_set)
        .with_context(|| format!("Failed to scan {:?}", config.library.root))?;

    if json {
        let entries: Vec<_> = catalog.list().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in catalog.list() {
            println!(
                "{}\t{}\t{}",
                entry.index,
                entry.display_name,
                entry.mime_type.unwrap_or("-")
            );
        }
    }

    Ok(())
}
