//! Media streaming module.
//!
//! Serves catalog entries as windows of at most `streaming.max_window_bytes`
//! using HTTP range requests, so browsers can seek without downloading the
//! whole file.
//!
//! # Routes
//!
//! - `GET /video/{index}` - One window of the file, always `206 Partial Content`

mod direct;
pub mod range;

pub use direct::{read_window, serve, stream_video, PartialContent};
pub use range::{compute_window, resolve_range, ByteRange, RequestedRange};

use axum::{routing::get, Router};

use crate::server::AppContext;

/// Mount point of the video router.
pub const VIDEO_ROUTE: &str = "/video";

/// Create direct streaming router.
pub fn video_router() -> Router<AppContext> {
    Router::new().route("/:index", get(stream_video))
}
