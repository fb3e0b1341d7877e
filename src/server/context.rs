//! Shared application context.
//!
//! [`AppContext`] is handed to every route handler via Axum state. The
//! configuration is immutable; the catalog lives in a [`CatalogStore`] that
//! hands out immutable snapshots and can swap in a rebuilt one.

use std::sync::Arc;

use parking_lot::RwLock;
use vidshelf_catalog::Catalog;

use crate::config::Config;

/// Holder for the current catalog snapshot.
///
/// Readers clone the inner `Arc` and keep using that snapshot for the whole
/// request; a rebuild replaces the pointer and never touches a published
/// catalog.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog in effect right now.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Publish `catalog` and return the snapshot it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        std::mem::replace(&mut *self.current.write(), Arc::new(catalog))
    }
}

/// Application context shared by all request handlers.
///
/// Cheap to clone: it only holds `Arc`s.
#[derive(Clone)]
pub struct AppContext {
    /// Immutable configuration.
    pub config: Arc<Config>,
    /// Current catalog.
    pub catalog: Arc<CatalogStore>,
}

impl AppContext {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(CatalogStore::new(catalog)),
        }
    }
}
