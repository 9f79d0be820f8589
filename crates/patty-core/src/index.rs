//! Managed-directory discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Marker left by the version-control tool.
pub const GIT_MARKER: &str = ".git";
/// Marker left by `patty create` for working directories.
pub const PATTY_MARKER: &str = ".patty";

/// Default scan depth for the list command.
pub const DEFAULT_DEPTH: usize = 4;

/// Discover managed directories up to `max_depth` levels below `root`.
///
/// A directory is managed when it contains a `.git` or `.patty`
/// subdirectory; the containing directory is reported, once, no matter
/// how many markers it holds. The walk visits directories only and
/// does not descend into markers.
pub fn index(root: &Path, max_depth: usize) -> Result<BTreeSet<PathBuf>> {
    tracing::debug!(root = %root.display(), max_depth, "scanning for managed directories");
    let mut managed = BTreeSet::new();
    if max_depth > 0 {
        visit(root, max_depth, &mut managed)?;
    }
    Ok(managed)
}

fn visit(dir: &Path, depth_left: usize, managed: &mut BTreeSet<PathBuf>) -> Result<()> {
    let scan_failed = |source| Error::ScanFailed {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(scan_failed)? {
        let entry = entry.map_err(scan_failed)?;
        if !entry.file_type().map_err(scan_failed)?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if name == GIT_MARKER || name == PATTY_MARKER {
            // The parent of the marker is the managed directory.
            managed.insert(dir.to_path_buf());
        } else if depth_left > 1 {
            visit(&entry.path(), depth_left - 1, managed)?;
        }
    }
    Ok(())
}
