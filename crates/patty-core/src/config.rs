//! Root path resolution.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the managed root.
pub const ROOT_ENV: &str = "PATTY_ROOT";

/// The managed root directory.
///
/// Resolved once per invocation and threaded into each component's entry
/// points, so the resolver, guard, and indexer stay testable against
/// synthetic roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PattyRoot {
    path: PathBuf,
}

impl PattyRoot {
    /// Create a root from an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the root from `$PATTY_ROOT`, falling back to
    /// `<home>/patty`.
    pub fn from_env() -> Result<Self> {
        if let Some(root) = env::var_os(ROOT_ENV) {
            if !root.is_empty() {
                return Ok(Self::new(PathBuf::from(root)));
            }
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join("patty")))
            .ok_or(Error::ConfigurationMissing)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strip the root prefix for display; paths outside the root pass
    /// through unchanged.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.path).unwrap_or(path)
    }
}
