//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which owns a temporary video directory and
//! builds an [`AppContext`] over it. [`TestHarness::with_server`] starts Axum
//! on a random port for socket-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tempfile::TempDir;
use vidshelf::config::{self, Config};
use vidshelf::server::{create_router, AppContext};
use vidshelf_catalog::Catalog;

/// A deterministic, non-repeating-looking byte pattern.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..=255u8).cycle().take(len).collect()
}

/// Test harness wrapping a temporary video directory.
pub struct TestHarness {
    pub dir: TempDir,
    pub max_window_bytes: u64,
}

impl TestHarness {
    /// Empty directory, 10-byte windows.
    pub fn new() -> Self {
        Self::with_window(10)
    }

    pub fn with_window(max_window_bytes: u64) -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
            max_window_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `data` to `rel` under the root, creating parent directories.
    pub fn write(&self, rel: &str, data: &[u8]) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, data).unwrap();
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.library.root = self.dir.path().to_path_buf();
        config.streaming.max_window_bytes = self.max_window_bytes;
        config
    }

    /// Build a catalog over the current directory contents.
    pub fn context(&self) -> AppContext {
        let config = self.config();
        let extensions = config::extension_set(&config).unwrap();
        let catalog = Catalog::build(&config.library.root, &extensions).unwrap();
        AppContext::new(config, catalog)
    }

    pub fn router(&self) -> Router {
        create_router(self.context())
    }

    /// Start an Axum server on a random port and return the bound address.
    pub async fn with_server(&self) -> SocketAddr {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        addr
    }
}
