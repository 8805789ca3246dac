//! Base domain resolver abstract Trait

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use crate::error::{OriginListError, OriginListResult};

/// Base Domain Resolver Trait
///
/// Supplies the registrable base domain (eTLD+1) of a hostname. Public suffix
/// data is owned by the implementation; the core never caches or retries.
///
/// Implementations:
/// - [`StaticBaseDomainResolver`]: explicit hostname -> base table
/// - [`LastLabelsResolver`]: last two labels, no suffix list
pub trait BaseDomainResolver: Send + Sync {
    /// Registrable base domain of `hostname`. Literal IP addresses resolve to themselves.
    fn base_domain_of(&self, hostname: &str) -> OriginListResult<String>;

    /// Whether `hostname` is a literal IPv4 address.
    fn is_ipv4_literal(&self, hostname: &str) -> bool {
        hostname.parse::<Ipv4Addr>().is_ok()
    }

    /// Whether `hostname` is a literal IPv6 address, with or without brackets.
    fn is_ipv6_literal(&self, hostname: &str) -> bool {
        let bare = hostname
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(hostname);
        bare.parse::<Ipv6Addr>().is_ok()
    }

    /// Whether `hostname` is any literal IP address.
    fn is_ip_literal(&self, hostname: &str) -> bool {
        self.is_ipv4_literal(hostname) || self.is_ipv6_literal(hostname)
    }
}

/// Reject empty and syntactically invalid hostnames.
///
/// A lone root (`"."`) counts as empty. IP literals pass through unchanged.
pub(crate) fn validate_hostname(hostname: &str) -> OriginListResult<&str> {
    if hostname.trim().trim_end_matches('.').is_empty() {
        return Err(OriginListError::InvalidHostname(hostname.to_string()));
    }
    if hostname.parse::<std::net::IpAddr>().is_ok() {
        return Ok(hostname);
    }
    match url::Host::parse(hostname) {
        Ok(_) => Ok(hostname),
        Err(e) => {
            log::debug!("Rejected hostname {hostname:?}: {e}");
            Err(OriginListError::InvalidHostname(hostname.to_string()))
        }
    }
}

/// Resolver backed by an explicit hostname -> base domain table.
///
/// Hosts that already run a public suffix lookup load its results here.
/// Hostnames missing from the table go to the fallback resolver, if any.
#[derive(Clone, Default)]
pub struct StaticBaseDomainResolver {
    bases: HashMap<String, String>,
    fallback: Option<Arc<dyn BaseDomainResolver>>,
}

impl StaticBaseDomainResolver {
    /// Create an empty resolver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the base domain of a hostname
    #[must_use]
    pub fn with(mut self, hostname: impl Into<String>, base: impl Into<String>) -> Self {
        self.insert(hostname, base);
        self
    }

    /// Resolve unregistered hostnames with `fallback`
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn BaseDomainResolver>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn insert(&mut self, hostname: impl Into<String>, base: impl Into<String>) {
        self.bases.insert(hostname.into(), base.into());
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl<H: Into<String>, B: Into<String>> FromIterator<(H, B)> for StaticBaseDomainResolver {
    fn from_iter<I: IntoIterator<Item = (H, B)>>(iter: I) -> Self {
        Self {
            bases: iter
                .into_iter()
                .map(|(h, b)| (h.into(), b.into()))
                .collect(),
            fallback: None,
        }
    }
}

impl BaseDomainResolver for StaticBaseDomainResolver {
    fn base_domain_of(&self, hostname: &str) -> OriginListResult<String> {
        let hostname = validate_hostname(hostname)?;
        // fully qualified names share the entry of their relative form
        let entry = self
            .bases
            .get(hostname)
            .or_else(|| self.bases.get(hostname.trim_end_matches('.')));
        if let Some(base) = entry {
            return Ok(base.clone());
        }
        if let Some(fallback) = &self.fallback {
            return fallback.base_domain_of(hostname);
        }
        if self.is_ip_literal(hostname) {
            return Ok(hostname.to_string());
        }
        Err(OriginListError::BaseDomainUnavailable {
            hostname: hostname.to_string(),
            reason: "no base domain registered".to_string(),
        })
    }
}

/// Resolver that treats the last two labels as the base domain.
///
/// Wrong for multi-label public suffixes (`example.co.uk` resolves to
/// `co.uk`); only for hosts without a public suffix list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastLabelsResolver;

impl BaseDomainResolver for LastLabelsResolver {
    fn base_domain_of(&self, hostname: &str) -> OriginListResult<String> {
        let hostname = validate_hostname(hostname)?;
        if self.is_ip_literal(hostname) {
            return Ok(hostname.to_string());
        }

        let trimmed = hostname.trim_end_matches('.');
        let base = match trimmed.rmatch_indices('.').nth(1) {
            Some((idx, _)) => &trimmed[idx + 1..],
            None => trimmed,
        };
        Ok(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_detection() {
        let r = LastLabelsResolver;
        assert!(r.is_ipv4_literal("192.168.0.1"));
        assert!(!r.is_ipv4_literal("192.168.0"));
        assert!(r.is_ipv6_literal("::1"));
        assert!(r.is_ipv6_literal("[2001:db8::1]"));
        assert!(!r.is_ipv6_literal("example.com"));
        assert!(r.is_ip_literal("10.0.0.1"));
    }

    #[test]
    fn last_labels_base() {
        let r = LastLabelsResolver;
        assert_eq!(r.base_domain_of("a.b.example.com").unwrap(), "example.com");
        assert_eq!(r.base_domain_of("example.com").unwrap(), "example.com");
        assert_eq!(r.base_domain_of("localhost").unwrap(), "localhost");
        assert_eq!(r.base_domain_of("10.1.2.3").unwrap(), "10.1.2.3");
        assert_eq!(r.base_domain_of("2001:db8::1").unwrap(), "2001:db8::1");
    }

    #[test]
    fn empty_hostname_is_invalid() {
        let err = LastLabelsResolver.base_domain_of("").unwrap_err();
        assert!(matches!(err, OriginListError::InvalidHostname(_)));
        let err = LastLabelsResolver.base_domain_of("   ").unwrap_err();
        assert!(matches!(err, OriginListError::InvalidHostname(_)));
    }

    #[test]
    fn root_only_hostname_is_invalid() {
        for host in [".", "..", " . "] {
            let err = LastLabelsResolver.base_domain_of(host).unwrap_err();
            assert!(matches!(err, OriginListError::InvalidHostname(_)), "{host:?}");
        }
    }

    #[test]
    fn trailing_dot_resolves_like_relative_name() {
        assert_eq!(
            LastLabelsResolver.base_domain_of("a.b.example.com.").unwrap(),
            "example.com"
        );
        let r = StaticBaseDomainResolver::new().with("cdn.example.co.uk", "example.co.uk");
        assert_eq!(r.base_domain_of("cdn.example.co.uk.").unwrap(), "example.co.uk");
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let err = LastLabelsResolver.base_domain_of("exa mple.com").unwrap_err();
        assert!(matches!(err, OriginListError::InvalidHostname(_)));
    }

    #[test]
    fn static_lookup() {
        let r = StaticBaseDomainResolver::new()
            .with("a.b.example.co.uk", "example.co.uk")
            .with("example.co.uk", "example.co.uk");
        assert_eq!(r.len(), 2);
        assert_eq!(
            r.base_domain_of("a.b.example.co.uk").unwrap(),
            "example.co.uk"
        );
        assert_eq!(r.base_domain_of("127.0.0.1").unwrap(), "127.0.0.1");
    }

    #[test]
    fn static_uses_fallback_for_unregistered() {
        let r = StaticBaseDomainResolver::new()
            .with("a.example.co.uk", "example.co.uk")
            .with_fallback(Arc::new(LastLabelsResolver));
        assert_eq!(r.base_domain_of("a.example.co.uk").unwrap(), "example.co.uk");
        assert_eq!(r.base_domain_of("x.tracker.net").unwrap(), "tracker.net");
    }

    #[test]
    fn static_missing_entry_is_unavailable() {
        let r = StaticBaseDomainResolver::new();
        let err = r.base_domain_of("tracker.example").unwrap_err();
        assert!(matches!(
            err,
            OriginListError::BaseDomainUnavailable { ref hostname, .. } if hostname == "tracker.example"
        ));
    }
}
