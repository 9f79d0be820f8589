//! List command: render the managed-directory inventory.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::PattyRoot;
use crate::error::Result;
use crate::index::{self, DEFAULT_DEPTH};

/// Options for `patty list`.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// How many directory levels below the root to scan.
    pub depth: usize,
    /// Render full paths instead of root-relative ones.
    pub full_path: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            full_path: false,
        }
    }
}

/// Discovered inventory plus the root it was scanned under.
#[derive(Debug, Clone)]
pub struct ListReport {
    root: PattyRoot,
    directories: BTreeSet<PathBuf>,
    full_path: bool,
}

impl ListReport {
    /// Render entries for display, absolute or root-relative.
    pub fn render(&self) -> Vec<String> {
        self.directories
            .iter()
            .map(|dir| {
                if self.full_path {
                    dir.display().to_string()
                } else {
                    self.root.relative(dir).display().to_string()
                }
            })
            .collect()
    }

    pub fn directories(&self) -> &BTreeSet<PathBuf> {
        &self.directories
    }
}

pub struct ListCommand;

impl ListCommand {
    pub fn run(root: &PattyRoot, options: &ListOptions) -> Result<ListReport> {
        let directories = index::index(root.path(), options.depth)?;
        Ok(ListReport {
            root: root.clone(),
            directories,
            full_path: options.full_path,
        })
    }
}
