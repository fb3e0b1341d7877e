//! vidshelf-catalog: discovery and stable indexing of media files.
//!
//! - [`walk`]: recursive directory walk filtered by extension
//! - [`natural`]: natural ordering (`ep2` before `ep10`)
//! - [`catalog`]: the immutable 1-based [`Catalog`]
//!
//! # Examples
//!
//! ```no_run
//! use vidshelf_catalog::{Catalog, ExtensionSet};
//!
//! let extensions = ExtensionSet::new([".mp4", ".mkv"])?;
//! let catalog = Catalog::build("/srv/videos", &extensions)?;
//! for entry in catalog.list() {
//!     println!("{} {}", entry.index, entry.display_name);
//! }
//! # Ok::<(), vidshelf_common::Error>(())
//! ```

pub mod catalog;
pub mod natural;
pub mod walk;

pub use catalog::{display_name, Catalog, CatalogEntry, ExtensionSet, MediaFile};
