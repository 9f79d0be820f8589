//! Typed failures for the resolve/guard/index pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Neither `$PATTY_ROOT` nor a home directory is available.
    #[error("patty root is not configured: set $PATTY_ROOT or $HOME")]
    ConfigurationMissing,

    /// The reference matched no recognized shape, or shorthand
    /// disambiguation exhausted every known service.
    #[error("{0}")]
    InvalidReference(String),

    /// Transport-level failure while probing remote services. Distinct
    /// from "no service confirmed existence".
    #[error("failed to probe remote repository services: {0}")]
    ProbeFailed(String),

    /// The computed destination escapes the managed root.
    #[error("path traversal detected: {authority:?} escapes {}", root.display())]
    PathTraversal { root: PathBuf, authority: String },

    /// The inventory walk hit a filesystem error.
    #[error("failed to scan {}", path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A managed directory could not be materialized.
    #[error("failed to create {}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external tool exited non-zero; stderr is surfaced verbatim.
    #[error("{tool} failed: {stderr}")]
    ExternalToolFailed { tool: String, stderr: String },
}
