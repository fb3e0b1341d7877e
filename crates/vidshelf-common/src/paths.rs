//! Path utilities for detecting media files by extension.
//!
//! Extensions are handled in their normalised form throughout vidshelf:
//! lower-cased with a leading dot (`.mkv`).

use std::path::Path;

/// Extensions served when no configuration says otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mp4", ".mkv"];

/// Content type used when a file's MIME type cannot be determined.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Normalise a user-supplied extension.
///
/// # Examples
///
/// ```
/// use vidshelf_common::paths::normalize_extension;
///
/// assert_eq!(normalize_extension("MKV"), ".mkv");
/// assert_eq!(normalize_extension(".Mp4"), ".mp4");
/// assert_eq!(normalize_extension("  webm "), ".webm");
/// ```
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Normalised extension of `path`, if it has one.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vidshelf_common::paths::extension_of;
///
/// assert_eq!(extension_of(Path::new("show/ep1.MKV")).as_deref(), Some(".mkv"));
/// assert_eq!(extension_of(Path::new("README")), None);
/// ```
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Guess the MIME type from a normalised extension.
///
/// Returns `None` for extensions outside the known table; callers fall back
/// to [`OCTET_STREAM`] where a header value is required.
pub fn guess_mime_type(ext: &str) -> Option<&'static str> {
    let mime = match ext.trim_start_matches('.') {
        "mp4" | "m4v" => "video/mp4",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "ts" | "m2ts" => "video/mp2t",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "ogv" => "video/ogg",
        "mpg" | "mpeg" => "video/mpeg",
        "3gp" => "video/3gpp",
        "m4a" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => return None,
    };
    Some(mime)
}
