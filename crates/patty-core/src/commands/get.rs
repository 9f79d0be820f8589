//! Get command: resolve a reference, validate the destination, clone.

use std::path::PathBuf;
use std::process::Command;

use crate::config::PattyRoot;
use crate::error::{Error, Result};
use crate::guard::guard;
use crate::remote::RepositoryProbe;
use crate::resolver::{self, ResolvedLocation};

/// Options for `patty get`.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Repository reference: full URL, `host/owner/name`, or shorthand.
    pub reference: String,
    /// Clone the specified branch.
    pub branch: Option<String>,
    /// Create a shallow clone of that depth.
    pub depth: Option<u32>,
    /// Suppress git output.
    pub quiet: bool,
}

/// Outcome of a successful get.
#[derive(Debug, Clone)]
pub struct GetReport {
    pub destination: PathBuf,
    pub location: ResolvedLocation,
}

/// Resolve a reference and validate its destination without spawning
/// the external tool.
///
/// This is the combined entry point for glue layers that only need the
/// clone parameters: the returned path is guaranteed to live under the
/// root.
pub fn resolve_and_guard(
    root: &PattyRoot,
    probe: &dyn RepositoryProbe,
    reference: &str,
) -> Result<(PathBuf, ResolvedLocation)> {
    let location = resolver::resolve(reference, probe)?;
    let destination = guard(root.path(), &location.authority)?;
    Ok((destination, location))
}

pub struct GetCommand;

impl GetCommand {
    /// Run the full pipeline, delegating the transfer to the `git`
    /// binary. The guard has already vetted the destination by the time
    /// git is invoked.
    pub fn run(
        root: &PattyRoot,
        probe: &dyn RepositoryProbe,
        options: &GetOptions,
    ) -> Result<GetReport> {
        let (destination, location) = resolve_and_guard(root, probe, &options.reference)?;

        let mut git = Command::new("git");
        git.arg("clone");
        if let Some(branch) = &options.branch {
            git.args(["--branch", branch]);
        }
        if let Some(depth) = options.depth {
            git.args(["--depth", &depth.to_string()]);
        }
        if options.quiet {
            git.arg("--quiet");
        }
        git.arg(location.url());
        git.arg(&destination);

        tracing::debug!(url = %location.url(), destination = %destination.display(), "cloning");
        run_git(git, "git clone")?;

        Ok(GetReport {
            destination,
            location,
        })
    }
}

/// Run a prepared git invocation, surfacing captured stderr on failure.
pub(crate) fn run_git(mut git: Command, tool: &str) -> Result<()> {
    let output = git.output().map_err(|source| Error::ExternalToolFailed {
        tool: tool.to_string(),
        stderr: source.to_string(),
    })?;
    if !output.status.success() {
        return Err(Error::ExternalToolFailed {
            tool: tool.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
