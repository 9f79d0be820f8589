use std::cell::Cell;

use patty_core::error::Error;
use patty_core::remote::{REMOTE_SERVICES, RepositoryProbe};
use patty_core::resolver::resolve;

/// Probe that fails the test when consulted.
struct UnreachableProbe;

impl RepositoryProbe for UnreachableProbe {
    fn probe(&self, owner: &str, name: &str) -> patty_core::Result<Option<String>> {
        panic!("probe must not be called for {owner}/{name}");
    }
}

/// Probe that mimics the registry walk against a fixed set of hosts
/// claiming the repository exists, counting invocations.
struct ServiceTableProbe {
    exists_on: Vec<&'static str>,
    calls: Cell<usize>,
}

impl ServiceTableProbe {
    fn new(exists_on: Vec<&'static str>) -> Self {
        Self {
            exists_on,
            calls: Cell::new(0),
        }
    }
}

impl RepositoryProbe for ServiceTableProbe {
    fn probe(&self, owner: &str, name: &str) -> patty_core::Result<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        for service in REMOTE_SERVICES {
            if self.exists_on.contains(&service.host) {
                return Ok(Some(format!("{}/{}/{}", service.host, owner, name)));
            }
        }
        Ok(None)
    }
}

/// Probe whose transport always fails.
struct BrokenTransportProbe;

impl RepositoryProbe for BrokenTransportProbe {
    fn probe(&self, _owner: &str, _name: &str) -> patty_core::Result<Option<String>> {
        Err(Error::ProbeFailed("connection refused".to_string()))
    }
}

#[test]
fn https_url_passes_through_verbatim() {
    let location = resolve("https://github.com/a/b", &UnreachableProbe).unwrap();
    assert_eq!(location.scheme, "https");
    assert_eq!(location.authority, "github.com/a/b");
    assert_eq!(location.url(), "https://github.com/a/b");
}

#[test]
fn git_url_passes_through_verbatim() {
    let location = resolve("git://example.org/a/b", &UnreachableProbe).unwrap();
    assert_eq!(location.scheme, "git");
    assert_eq!(location.authority, "example.org/a/b");
}

#[test]
fn host_qualified_reference_needs_no_probe() {
    let location = resolve("github.com/a/b", &UnreachableProbe).unwrap();
    assert_eq!(location.scheme, "https");
    assert_eq!(location.authority, "github.com/a/b");
}

#[test]
fn shorthand_uses_the_first_confirming_service() {
    let probe = ServiceTableProbe::new(vec!["gitlab.com"]);
    let location = resolve("owner/name", &probe).unwrap();
    assert_eq!(location.authority, "gitlab.com/owner/name");
    assert_eq!(probe.calls.get(), 1);
}

#[test]
fn shorthand_priority_is_deterministic_when_both_confirm() {
    let probe = ServiceTableProbe::new(vec!["github.com", "gitlab.com"]);
    let location = resolve("owner/name", &probe).unwrap();
    assert_eq!(location.scheme, "https");
    assert_eq!(location.authority, "github.com/owner/name");
}

#[test]
fn shorthand_exhaustion_is_an_invalid_reference() {
    let probe = ServiceTableProbe::new(vec![]);
    let err = resolve("owner/name", &probe).unwrap_err();
    assert!(matches!(err, Error::InvalidReference(_)));
    let message = err.to_string();
    assert!(message.contains("github.com/owner/repo"), "{message}");
}

#[test]
fn transport_failure_is_not_conflated_with_not_found() {
    let err = resolve("owner/name", &BrokenTransportProbe).unwrap_err();
    assert!(matches!(err, Error::ProbeFailed(_)));
}

#[test]
fn bare_name_is_rejected_without_probing() {
    let err = resolve("just-a-name", &UnreachableProbe).unwrap_err();
    assert!(matches!(err, Error::InvalidReference(_)));
}

#[test]
fn too_many_separators_are_rejected_without_probing() {
    let err = resolve("a/b/c/d", &UnreachableProbe).unwrap_err();
    assert!(matches!(err, Error::InvalidReference(_)));
}

#[test]
fn unknown_scheme_falls_through_to_rejection() {
    // ftp://a/b carries three separators once the scheme is not
    // recognized, so it is rejected rather than stripped.
    let err = resolve("ftp://a/b", &UnreachableProbe).unwrap_err();
    assert!(matches!(err, Error::InvalidReference(_)));
}
