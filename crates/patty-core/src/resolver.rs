//! Reference resolution: raw reference string to (scheme, authority).

use crate::error::{Error, Result};
use crate::remote::RepositoryProbe;

/// Schemes accepted verbatim in a fully qualified reference.
const KNOWN_SCHEMES: &[&str] = &["https", "git"];

const SHORTHAND_HINT: &str = "Specified repository does not exist. If the repository is private, \
     specify the remote repository service domain, e.g. github.com/owner/repo";

/// A resolved clone location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub scheme: String,
    /// `host/owner/name`; doubles as the destination path under root.
    pub authority: String,
}

impl ResolvedLocation {
    fn https(authority: impl Into<String>) -> Self {
        Self {
            scheme: "https".to_string(),
            authority: authority.into(),
        }
    }

    /// Render the clone URL for the external tool.
    pub fn url(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}

/// Classify a raw reference and produce its clone location.
///
/// Shapes, in order:
/// - `https://...` or `git://...` — scheme and authority pass through
///   verbatim; safety is the guard's job, not validated here.
/// - `host/owner/name` — assumed https, no network call.
/// - `owner/name` — shorthand; the probe decides the host.
///
/// Anything else is rejected without touching the network. Slash
/// counting applies only when no recognized scheme prefix is present.
pub fn resolve(reference: &str, probe: &dyn RepositoryProbe) -> Result<ResolvedLocation> {
    if let Some(location) = split_scheme(reference) {
        return Ok(location);
    }

    match reference.matches('/').count() {
        2 => Ok(ResolvedLocation::https(reference)),
        1 => {
            let (owner, name) = reference.split_once('/').unwrap_or((reference, ""));
            match probe.probe(owner, name)? {
                Some(authority) => Ok(ResolvedLocation::https(authority)),
                None => Err(Error::InvalidReference(SHORTHAND_HINT.to_string())),
            }
        }
        _ => Err(Error::InvalidReference(SHORTHAND_HINT.to_string())),
    }
}

fn split_scheme(reference: &str) -> Option<ResolvedLocation> {
    let (scheme, authority) = reference.split_once("://")?;
    if !KNOWN_SCHEMES.contains(&scheme) {
        return None;
    }
    Some(ResolvedLocation {
        scheme: scheme.to_string(),
        authority: authority.to_string(),
    })
}
