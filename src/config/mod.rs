mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use vidshelf_catalog::ExtensionSet;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./vidshelf.toml",
        "~/.config/vidshelf/config.toml",
        "/etc/vidshelf/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.streaming.max_window_bytes == 0 {
        anyhow::bail!("streaming.max_window_bytes must be greater than 0");
    }

    extension_set(config)?;

    if !config.library.root.is_dir() {
        tracing::warn!("Library root is not a directory: {:?}", config.library.root);
    }

    Ok(())
}

/// The configured extensions as a normalised set.
pub fn extension_set(config: &Config) -> Result<ExtensionSet> {
    ExtensionSet::new(&config.library.extensions).context("Invalid library.extensions")
}
