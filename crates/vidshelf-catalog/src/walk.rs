//! Recursive discovery of media files under a root directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vidshelf_common::paths::extension_of;
use vidshelf_common::{Error, Result};
use walkdir::WalkDir;

use crate::catalog::ExtensionSet;

/// A file found under the catalog root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path relative to the root, or the absolute path when the file
    /// resolves outside the root (symlink escape).
    pub relative_path: PathBuf,
    /// Canonical absolute path.
    pub absolute_path: PathBuf,
}

/// Resolve `root` to its canonical form and check it can be listed.
pub fn canonical_root(root: &Path) -> Result<PathBuf> {
    let canonical =
        std::fs::canonicalize(root).map_err(|e| Error::directory_unavailable(root, e))?;
    std::fs::read_dir(&canonical).map_err(|e| Error::directory_unavailable(root, e))?;
    Ok(canonical)
}

/// Walk `root` recursively and collect regular files whose extension is in
/// `extensions`.
///
/// Symlinks are followed. Entries that cannot be read below the root are
/// skipped with a warning. The result is unordered.
pub fn discover(root: &Path, extensions: &ExtensionSet) -> Result<Vec<DiscoveredFile>> {
    let root = canonical_root(root)?;
    let mut found = Vec::new();

    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(ext) = extension_of(entry.path()) else {
            continue;
        };
        if !extensions.contains(&ext) {
            continue;
        }

        let absolute_path = match std::fs::canonicalize(entry.path()) {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping {:?}: {}", entry.path(), e);
                continue;
            }
        };

        let relative_path = if absolute_path.starts_with(&root) {
            entry
                .path()
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| absolute_path.clone())
        } else {
            debug!("{:?} resolves outside the root", entry.path());
            absolute_path.clone()
        };

        found.push(DiscoveredFile {
            relative_path,
            absolute_path,
        });
    }

    Ok(found)
}
