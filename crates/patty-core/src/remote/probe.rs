//! Existence probing against remote repository services.

use crate::error::{Error, Result};

use super::registry::{REMOTE_SERVICES, RemoteService};

/// Decides which hosting service owns a shorthand reference.
///
/// Abstracted behind a trait so the resolver can be exercised without
/// network access.
pub trait RepositoryProbe {
    /// Returns the full `host/owner/name` authority of the first service
    /// confirming existence, or `None` when every service said no.
    fn probe(&self, owner: &str, name: &str) -> Result<Option<String>>;
}

/// Blocking HTTP prober over the static service registry.
#[derive(Debug)]
pub struct HttpProber {
    client: reqwest::blocking::Client,
    services: &'static [RemoteService],
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("patty/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| Error::ProbeFailed(err.to_string()))?;
        Ok(Self {
            client,
            services: REMOTE_SERVICES,
        })
    }
}

impl RepositoryProbe for HttpProber {
    /// Sequential first-match search in registry order. Requests are
    /// never issued in parallel: the priority guarantee depends on the
    /// earlier service winning when both would confirm.
    fn probe(&self, owner: &str, name: &str) -> Result<Option<String>> {
        for service in self.services {
            let url = service.probe_url(owner, name);
            tracing::debug!(host = service.host, %url, "probing remote service");
            let response = self
                .client
                .get(&url)
                .send()
                .map_err(|err| Error::ProbeFailed(err.to_string()))?;
            // Only the status code is consumed, never the body.
            if response.status().as_u16() < 300 {
                return Ok(Some(format!("{}/{}/{}", service.host, owner, name)));
            }
        }
        Ok(None)
    }
}
