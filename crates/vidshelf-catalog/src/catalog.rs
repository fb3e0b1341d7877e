//! The immutable index of served media files.
//!
//! A [`Catalog`] is built once from a root directory and an [`ExtensionSet`].
//! Files are ordered naturally by relative path and numbered from 1 with no
//! gaps. The same directory tree always yields the same numbering.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::info;
use vidshelf_common::paths::{
    extension_of, guess_mime_type, normalize_extension, DEFAULT_EXTENSIONS,
};
use vidshelf_common::{Error, Result};

use crate::natural::natural_path_cmp;
use crate::walk::{discover, DiscoveredFile};

/// Separator placed between path components in display names.
pub const DISPLAY_SEPARATOR: &str = " ▶ ";

/// Non-empty set of normalised extensions (`.mp4`, `.mkv`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Build a set from user-supplied extensions. Case and the leading dot
    /// are optional.
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if ext == "." {
                return Err(Error::invalid_input("extension must not be empty"));
            }
            set.insert(ext);
        }
        if set.is_empty() {
            return Err(Error::invalid_input("at least one extension is required"));
        }
        Ok(Self(set))
    }

    /// Whether the normalised extension `ext` is allowed.
    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }
}

/// One discovered media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    /// Relative path joined with [`DISPLAY_SEPARATOR`]. Presentation only.
    pub display_name: String,
    /// Lower-cased extension with leading dot.
    pub extension: String,
    pub mime_type: Option<&'static str>,
    /// Path relative to the catalog root; used for ordering.
    pub relative_path: PathBuf,
    /// Canonical absolute path on disk. Never serialised.
    #[serde(skip)]
    pub absolute_path: PathBuf,
}

impl MediaFile {
    fn from_discovered(file: DiscoveredFile) -> Self {
        let extension = extension_of(&file.relative_path)
            .or_else(|| extension_of(&file.absolute_path))
            .unwrap_or_default();
        Self {
            display_name: display_name(&file.relative_path),
            mime_type: guess_mime_type(&extension),
            extension,
            relative_path: file.relative_path,
            absolute_path: file.absolute_path,
        }
    }
}

/// Render a relative path for display: `season 1/ep1.mkv` becomes
/// `season 1 ▶ ep1.mkv`.
pub fn display_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

/// A row of the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry<'a> {
    pub index: u64,
    pub display_name: &'a str,
    pub mime_type: Option<&'static str>,
}

/// Immutable, 1-based index of media files under a root directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    extensions: ExtensionSet,
    files: Vec<MediaFile>,
}

impl Catalog {
    /// Scan `root` and index every file whose extension is in `extensions`.
    ///
    /// Fails with [`Error::DirectoryUnavailable`] when the root is missing,
    /// not a directory, or unreadable.
    pub fn build(root: impl AsRef<Path>, extensions: &ExtensionSet) -> Result<Self> {
        let root = root.as_ref();
        let started = Instant::now();

        let mut discovered = discover(root, extensions)?;
        discovered.sort_by(|a, b| natural_path_cmp(&a.relative_path, &b.relative_path));

        let files: Vec<MediaFile> = discovered
            .into_iter()
            .map(MediaFile::from_discovered)
            .collect();

        info!(
            "Catalog built: {} files under {:?} in {:?}",
            files.len(),
            root,
            started.elapsed()
        );

        Ok(Self {
            root: root.to_path_buf(),
            extensions: extensions.clone(),
            files,
        })
    }

    /// A catalog with no entries.
    pub fn empty(root: impl Into<PathBuf>, extensions: ExtensionSet) -> Self {
        Self {
            root: root.into(),
            extensions,
            files: Vec::new(),
        }
    }

    /// Look up the file at `index` (1-based).
    pub fn get(&self, index: u64) -> Result<&MediaFile> {
        index
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.files.get(i))
            .ok_or_else(|| Error::not_found(index))
    }

    /// Look up a file by an index taken verbatim from a request path.
    ///
    /// Only the canonical decimal form is accepted: ASCII digits, no sign,
    /// no leading zeros. Anything else is reported as not found, so each
    /// entry has exactly one URL.
    pub fn lookup(&self, raw_index: &str) -> Result<&MediaFile> {
        let canonical = !raw_index.is_empty()
            && !raw_index.starts_with('0')
            && raw_index.bytes().all(|b| b.is_ascii_digit());
        if !canonical {
            return Err(Error::not_found(raw_index));
        }
        let index: u64 = raw_index
            .parse()
            .map_err(|_| Error::not_found(raw_index))?;
        self.get(index)
    }

    /// Ordered listing in ascending index order. Each call starts afresh.
    pub fn list(&self) -> impl Iterator<Item = CatalogEntry<'_>> + Clone + '_ {
        self.files.iter().zip(1u64..).map(|(file, index)| CatalogEntry {
            index,
            display_name: &file.display_name,
            mime_type: file.mime_type,
        })
    }

    /// Iterate `(index, file)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &MediaFile)> + '_ {
        (1u64..).zip(self.files.iter())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The root this catalog was built from, as given.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }
}
