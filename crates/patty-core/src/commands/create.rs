//! Create command: materialize a working directory with the scratch
//! marker.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::config::PattyRoot;
use crate::error::{Error, Result};
use crate::guard::guard;
use crate::index::PATTY_MARKER;

use super::get::run_git;

/// Options for `patty create`.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Directory to create, relative to the root.
    pub dir: String,
    /// Also initialize a git repository in the new directory.
    pub git_init: bool,
}

pub struct CreateCommand;

impl CreateCommand {
    /// Create `<root>/<dir>/.patty`, optionally running `git init -q`.
    ///
    /// User-supplied paths cross the same safety boundary as resolved
    /// authorities.
    pub fn run(root: &PattyRoot, options: &CreateOptions) -> Result<PathBuf> {
        let target = guard(root.path(), &options.dir)?;

        let marker = target.join(PATTY_MARKER);
        fs::create_dir_all(&marker).map_err(|source| Error::CreateFailed {
            path: marker.clone(),
            source,
        })?;

        if options.git_init {
            let mut git = Command::new("git");
            git.args(["init", "-q"]).arg(&target);
            run_git(git, "git init")?;
        }

        Ok(target)
    }
}
