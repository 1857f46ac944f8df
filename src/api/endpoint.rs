//! The two Travis CI instances and the per-instance credential store.

use std::fmt;

/// Default base URL of the Travis CI PRO instance
pub const PRO_BASE_URL: &str = "https://api.travis-ci.com";

/// Default base URL of the public (open source) Travis CI instance
pub const PUBLIC_BASE_URL: &str = "https://api.travis-ci.org";

/// One of the two Travis CI instances sharing the same API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Pro,
    Public,
}

impl Endpoint {
    /// Both endpoints, in the order they are queried (pro first).
    pub const ALL: [Endpoint; 2] = [Endpoint::Pro, Endpoint::Public];

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Endpoint::Pro => PRO_BASE_URL,
            Endpoint::Public => PUBLIC_BASE_URL,
        }
    }

    /// Select the endpoints that are not skipped, preserving `ALL` order.
    pub fn selected(skip_pro: bool, skip_public: bool) -> Vec<Endpoint> {
        Self::ALL
            .into_iter()
            .filter(|endpoint| match endpoint {
                Endpoint::Pro => !skip_pro,
                Endpoint::Public => !skip_public,
            })
            .collect()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Pro => write!(f, "travis-ci.com"),
            Endpoint::Public => write!(f, "travis-ci.org"),
        }
    }
}

/// Access tokens obtained from the auth exchange, one slot per endpoint.
///
/// Held in memory for the lifetime of the process only.
#[derive(Clone, Default)]
pub struct Credentials {
    pro: Option<String>,
    public: Option<String>,
}

impl Credentials {
    pub fn set(&mut self, endpoint: Endpoint, token: String) {
        let slot = match endpoint {
            Endpoint::Pro => &mut self.pro,
            Endpoint::Public => &mut self.public,
        };
        *slot = Some(token);
    }

    /// Token for `endpoint`, or `None` when unset or empty.
    pub fn get(&self, endpoint: Endpoint) -> Option<&str> {
        let slot = match endpoint {
            Endpoint::Pro => &self.pro,
            Endpoint::Public => &self.public,
        };
        slot.as_deref().filter(|token| !token.is_empty())
    }

    /// Value of the `Authorization` header for `endpoint`, if authenticated.
    pub fn authorization_header(&self, endpoint: Endpoint) -> Option<String> {
        self.get(endpoint).map(|token| format!("token \"{}\"", token))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |slot: &Option<String>| slot.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Credentials")
            .field("pro", &redact(&self.pro))
            .field("public", &redact(&self.public))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_endpoints() {
        assert_eq!(
            Endpoint::selected(false, false),
            vec![Endpoint::Pro, Endpoint::Public]
        );
        assert_eq!(Endpoint::selected(true, false), vec![Endpoint::Public]);
        assert_eq!(Endpoint::selected(false, true), vec![Endpoint::Pro]);
        assert!(Endpoint::selected(true, true).is_empty());
    }

    #[test]
    fn test_authorization_header_format() {
        let mut credentials = Credentials::default();
        credentials.set(Endpoint::Pro, "abc123".to_string());

        assert_eq!(
            credentials.authorization_header(Endpoint::Pro),
            Some("token \"abc123\"".to_string())
        );
        assert_eq!(credentials.authorization_header(Endpoint::Public), None);
    }

    #[test]
    fn test_empty_token_is_treated_as_unauthenticated() {
        let mut credentials = Credentials::default();
        credentials.set(Endpoint::Public, String::new());

        assert_eq!(credentials.get(Endpoint::Public), None);
        assert_eq!(credentials.authorization_header(Endpoint::Public), None);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let mut credentials = Credentials::default();
        credentials.set(Endpoint::Pro, "secret-token-123".to_string());

        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("secret-token-123"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
