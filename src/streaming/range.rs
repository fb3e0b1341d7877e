//! `Range` header resolution and byte-window computation.
//!
//! Parsing is lenient: a header that is absent, uses another unit, asks for
//! several ranges, uses the suffix form (`bytes=-500`), or is otherwise
//! unreadable resolves to "from the start, default window". Playback keeps
//! working even when a client sends something this server does not support.

use std::sync::LazyLock;

use regex::Regex;
use vidshelf_common::{Error, Result};

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^bytes=([0-9]+)-([0-9]*)$").expect("range pattern is valid")
});

/// Start offset and optional inclusive end offset asked for by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedRange {
    pub start: u64,
    pub end: Option<u64>,
}

/// A serviceable inclusive window `[start, end]` within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes in the window.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for this window.
    pub fn content_range(&self, file_size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, file_size)
    }
}

/// Resolve a raw `Range` header value.
///
/// Anything other than a single `bytes=<start>-[<end>]` range falls back to
/// [`RequestedRange::default`], i.e. `(0, None)`. Offsets are not checked
/// against the file size here; see [`compute_window`].
pub fn resolve_range(header: Option<&str>) -> RequestedRange {
    header.and_then(parse_byte_range).unwrap_or_default()
}

fn parse_byte_range(value: &str) -> Option<RequestedRange> {
    let caps = RANGE_PATTERN.captures(value.trim())?;
    let start: u64 = caps.get(1)?.as_str().parse().ok()?;
    let end = match caps.get(2).map(|m| m.as_str()) {
        None | Some("") => None,
        Some(digits) => Some(digits.parse::<u64>().ok()?),
    };

    // An inverted range is syntactically invalid; ignore it like any other.
    if end.is_some_and(|end| end < start) {
        return None;
    }

    Some(RequestedRange { start, end })
}

/// Compute the window actually served for `requested` within a file of
/// `file_size` bytes.
///
/// The end is clamped to the last byte of the file and to
/// `start + max_window_bytes - 1`, whichever is smaller, so no response is
/// larger than `max_window_bytes`. A start at or beyond the end of the file
/// is [`Error::RangeNotSatisfiable`].
pub fn compute_window(
    file_size: u64,
    requested: RequestedRange,
    max_window_bytes: u64,
) -> Result<ByteRange> {
    let start = requested.start;
    if start >= file_size {
        return Err(Error::RangeNotSatisfiable { start, file_size });
    }

    let window_end = start.saturating_add(max_window_bytes.max(1) - 1);
    let end = requested
        .end
        .unwrap_or(window_end)
        .min(file_size - 1)
        .min(window_end);

    Ok(ByteRange { start, end })
}
