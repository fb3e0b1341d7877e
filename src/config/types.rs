use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vidshelf_common::paths::DEFAULT_EXTENSIONS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub streaming: StreamingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    52165
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory scanned for videos
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Extensions to serve, case-insensitive, leading dot optional
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreamingConfig {
    /// Largest window served by a single range response (default: 10 MiB)
    #[serde(default = "default_max_window_bytes")]
    pub max_window_bytes: u64,
}

pub const DEFAULT_MAX_WINDOW_BYTES: u64 = 10 * 1024 * 1024;

fn default_max_window_bytes() -> u64 {
    DEFAULT_MAX_WINDOW_BYTES
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            max_window_bytes: default_max_window_bytes(),
        }
    }
}
