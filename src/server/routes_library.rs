//! Library routes: the HTML index, the JSON listing, and catalog rebuilds.

use std::path::PathBuf;

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use vidshelf_catalog::{Catalog, CatalogEntry};
use vidshelf_common::Error;

use super::{pages, AppContext, AppError};
use crate::streaming::VIDEO_ROUTE;

/// Create library routes
pub fn library_routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(index_page))
        .route("/api/videos", get(list_videos))
        .route("/api/rescan", post(rescan))
}

/// GET /
async fn index_page(State(ctx): State<AppContext>) -> Html<String> {
    let catalog = ctx.catalog.snapshot();
    let rendered_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    tracing::debug!("Rendering index with {} videos", catalog.len());
    Html(pages::render_index(catalog.list(), VIDEO_ROUTE, &rendered_at))
}

/// GET /api/videos
async fn list_videos(State(ctx): State<AppContext>) -> impl IntoResponse {
    let catalog = ctx.catalog.snapshot();
    let entries: Vec<CatalogEntry<'_>> = catalog.list().collect();
    Json(serde_json::json!(entries))
}

#[derive(Debug, Default, Deserialize)]
pub struct RescanRequest {
    /// New root directory; the current root is rescanned when absent.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RescanResponse {
    pub root: String,
    pub count: usize,
}

impl RescanRequest {
    /// Parse a rescan body. An empty (or all-whitespace) body means "rescan
    /// the current root"; anything else must be a valid request object.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| Error::invalid_input(format!("invalid rescan request: {e}")))
    }
}

/// POST /api/rescan
///
/// Builds a fresh catalog off the async runtime and publishes it. On
/// failure the current catalog stays in place.
async fn rescan(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<RescanResponse>, AppError> {
    let request = RescanRequest::from_body(&body)?;
    let current = ctx.catalog.snapshot();
    let root = request
        .root
        .unwrap_or_else(|| current.root().to_path_buf());
    let extensions = current.extensions().clone();

    tracing::info!("Rescanning {:?}", root);
    let build_root = root.clone();
    let catalog = tokio::task::spawn_blocking(move || Catalog::build(&build_root, &extensions))
        .await
        .map_err(|e| Error::Internal(format!("catalog build task failed: {e}")))??;

    let count = catalog.len();
    ctx.catalog.replace(catalog);

    Ok(Json(RescanResponse {
        root: root.display().to_string(),
        count,
    }))
}
