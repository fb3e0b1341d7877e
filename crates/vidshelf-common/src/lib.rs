//! vidshelf-common: shared error types and file-type helpers.
//!
//! - **Error Handling**: [`Error`] covers every catalog and streaming failure
//!   and maps it to an HTTP status.
//! - **Path Utilities**: extension normalisation and MIME type guessing.
//!
//! # Examples
//!
//! ```
//! use vidshelf_common::paths::guess_mime_type;
//! use vidshelf_common::{Error, Result};
//!
//! assert_eq!(guess_mime_type(".mkv"), Some("video/x-matroska"));
//!
//! fn lookup() -> Result<()> {
//!     Err(Error::not_found(3))
//! }
//! assert_eq!(lookup().unwrap_err().http_status(), 404);
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
