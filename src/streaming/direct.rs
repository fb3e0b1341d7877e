//! Direct streaming with HTTP range requests.
//!
//! Every response to `GET /video/{index}` is `206 Partial Content` carrying at
//! most one window of the file. The window is read in full before the
//! response is sent; the handler future is dropped (and the read abandoned)
//! when the client goes away.

use std::io::SeekFrom;
use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::{debug, error};
use vidshelf_catalog::Catalog;
use vidshelf_common::paths::OCTET_STREAM;
use vidshelf_common::{Error, Result};

use super::range::{compute_window, resolve_range, ByteRange};
use crate::server::{AppContext, AppError};

/// One framed window of a file, ready to send.
#[derive(Debug, Clone)]
pub struct PartialContent {
    pub range: ByteRange,
    pub file_size: u64,
    pub mime_type: Option<&'static str>,
    pub body: Bytes,
}

impl IntoResponse for PartialContent {
    fn into_response(self) -> Response {
        let content_type = self.mime_type.unwrap_or(OCTET_STREAM);
        (
            StatusCode::PARTIAL_CONTENT,
            [
                (header::CONTENT_TYPE.as_str(), content_type.to_string()),
                (
                    header::CONTENT_RANGE.as_str(),
                    self.range.content_range(self.file_size),
                ),
                (header::CONTENT_LENGTH.as_str(), self.range.length().to_string()),
                (header::ACCEPT_RANGES.as_str(), "bytes".to_string()),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Resolve `raw_index` in `catalog` and read the window asked for by
/// `range_header`.
pub async fn serve(
    catalog: &Catalog,
    raw_index: &str,
    range_header: Option<&str>,
    max_window_bytes: u64,
) -> Result<PartialContent> {
    let file = catalog.lookup(raw_index)?;
    let requested = resolve_range(range_header);
    debug!(
        index = raw_index,
        header = ?range_header,
        start = requested.start,
        end = ?requested.end,
        "Resolved range request"
    );

    let path = &file.absolute_path;
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| stale(path, e))?;
    if !metadata.is_file() {
        return Err(stale(path, std::io::Error::other("not a regular file")));
    }
    let file_size = metadata.len();

    let range = compute_window(file_size, requested, max_window_bytes)?;
    let body = read_window(path, range).await?;

    Ok(PartialContent {
        range,
        file_size,
        mime_type: file.mime_type,
        body,
    })
}

fn stale(path: &FsPath, e: std::io::Error) -> Error {
    tracing::warn!("Catalog entry {:?} is no longer available: {}", path, e);
    Error::file_unavailable(path, e)
}

/// Read exactly `range.length()` bytes starting at `range.start`.
///
/// A short read (truncated file, concurrent deletion) is
/// [`Error::IncompleteRead`] and is not retried.
pub async fn read_window(path: &FsPath, range: ByteRange) -> Result<Bytes> {
    let mut file = File::open(path).await.map_err(|e| stale(path, e))?;
    file.seek(SeekFrom::Start(range.start)).await?;

    let expected = range.length();
    let capacity = usize::try_from(expected)
        .map_err(|_| Error::Internal(format!("window of {expected} bytes exceeds memory")))?;
    let mut buf = Vec::with_capacity(capacity);
    file.take(expected).read_to_end(&mut buf).await?;

    let actual = buf.len() as u64;
    if actual != expected {
        error!(
            path = %path.display(),
            start = range.start,
            expected,
            actual,
            "Short read while serving window"
        );
        return Err(Error::IncompleteRead { expected, actual });
    }

    Ok(Bytes::from(buf))
}

/// GET /video/:index
pub async fn stream_video(
    State(ctx): State<AppContext>,
    Path(index): Path<String>,
    headers: HeaderMap,
) -> std::result::Result<PartialContent, AppError> {
    let catalog = ctx.catalog.snapshot();
    let range_header = headers.get(header::RANGE).and_then(|v| v.to_str().ok());

    Ok(serve(
        &catalog,
        &index,
        range_header,
        ctx.config.streaming.max_window_bytes,
    )
    .await?)
}
