//! Static registry of known remote repository services.

/// A known hosting service and its existence-probe endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RemoteService {
    /// Host identifier, used as the first authority segment.
    pub host: &'static str,
    /// Probe endpoint template with `{owner}` and `{name}` placeholders.
    pub probe_template: &'static str,
}

impl RemoteService {
    /// Substitute owner and name into the probe endpoint template.
    pub fn probe_url(&self, owner: &str, name: &str) -> String {
        self.probe_template
            .replace("{owner}", owner)
            .replace("{name}", name)
    }
}

/// Disambiguation priority for shorthand references.
///
/// Iteration order is load-bearing: the first service that confirms
/// existence wins, so this is an ordered slice and not a map.
pub const REMOTE_SERVICES: &[RemoteService] = &[
    RemoteService {
        host: "github.com",
        probe_template: "https://api.github.com/repos/{owner}/{name}",
    },
    RemoteService {
        host: "gitlab.com",
        probe_template: "https://gitlab.com/api/v4/projects/{owner}%2F{name}",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_is_the_highest_priority_service() {
        assert_eq!(REMOTE_SERVICES[0].host, "github.com");
        assert_eq!(REMOTE_SERVICES[1].host, "gitlab.com");
    }

    #[test]
    fn probe_url_substitutes_owner_and_name() {
        assert_eq!(
            REMOTE_SERVICES[0].probe_url("ryoo14", "patty"),
            "https://api.github.com/repos/ryoo14/patty"
        );
        assert_eq!(
            REMOTE_SERVICES[1].probe_url("ryoo14", "patty"),
            "https://gitlab.com/api/v4/projects/ryoo14%2Fpatty"
        );
    }
}
