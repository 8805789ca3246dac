//! Domain ordering service
//!
//! Orders hostnames by registrable base domain first (ignoring the top-level
//! suffix) and by reversed subdomain path second, so a tracker's subdomains
//! cluster together under it.

use std::sync::Arc;

use crate::error::OriginListResult;
use crate::traits::BaseDomainResolver;
use crate::types::{OriginRecord, SortKey};

/// Ordering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingOptions {
    /// Compare base domains without their top-level suffix (`example` for `example.com`).
    pub strip_top_level_suffix: bool,
}

impl Default for OrderingOptions {
    fn default() -> Self {
        Self {
            strip_top_level_suffix: true,
        }
    }
}

/// Domain ordering service
///
/// Stateless apart from the resolver; safe to share across threads.
#[derive(Clone)]
pub struct DomainOrderingService {
    resolver: Arc<dyn BaseDomainResolver>,
    options: OrderingOptions,
}

impl DomainOrderingService {
    /// Create an ordering service with default options
    #[must_use]
    pub fn new(resolver: Arc<dyn BaseDomainResolver>) -> Self {
        Self::with_options(resolver, OrderingOptions::default())
    }

    #[must_use]
    pub fn with_options(resolver: Arc<dyn BaseDomainResolver>, options: OrderingOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> OrderingOptions {
        self.options
    }

    /// Derive the sort key of a hostname.
    ///
    /// Resolver failures are propagated; a substituted key would corrupt the order.
    pub fn sort_key_of(&self, hostname: &str) -> OriginListResult<SortKey> {
        let base = self
            .resolver
            .base_domain_of(hostname)?
            .trim_end_matches('.')
            .to_string();
        // the root label never contributes to the key
        let host = hostname.strip_suffix('.').unwrap_or(hostname);

        // labels strictly left of the base domain
        let leading = if host.len() > base.len() {
            let stripped = host
                .strip_suffix(base.as_str())
                .and_then(|rest| rest.strip_suffix('.'));
            if stripped.is_none() {
                log::debug!("{hostname} does not end with its base domain {base}");
            }
            stripped.unwrap_or_default()
        } else {
            ""
        };

        let subdomain_part = if leading.is_empty() {
            String::new()
        } else {
            leading.rsplit('.').collect::<Vec<_>>().join(".")
        };

        let keep_whole_base = !self.options.strip_top_level_suffix
            || self.resolver.is_ip_literal(hostname)
            || !base.contains('.');
        let base_part = if keep_whole_base {
            base
        } else {
            match base.split_once('.') {
                Some((name, _suffix)) => name.to_string(),
                None => base,
            }
        };

        let key = SortKey {
            base_part,
            subdomain_part,
        };
        log::trace!("Sort key for {hostname}: {key}");
        Ok(key)
    }

    /// Stable sort of hostnames by sort key. Returns a new vector.
    pub fn sort_domains<S>(&self, hostnames: &[S]) -> OriginListResult<Vec<S>>
    where
        S: AsRef<str> + Clone,
    {
        self.sort_by_hostname(hostnames, |h| h.as_ref())
    }

    /// Stable sort of origin records by hostname sort key. Returns a new list.
    pub fn sort_origins(&self, records: &[OriginRecord]) -> OriginListResult<Vec<OriginRecord>> {
        self.sort_by_hostname(records, |r| r.hostname.as_str())
    }

    fn sort_by_hostname<T, F>(&self, items: &[T], hostname: F) -> OriginListResult<Vec<T>>
    where
        T: Clone,
        F: Fn(&T) -> &str,
    {
        // compute each key once, carrying the input index as the final tie-break
        let mut keyed = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.sort_key_of(hostname(item))
                    .map(|key| (key.combined(), index))
            })
            .collect::<OriginListResult<Vec<(String, usize)>>>()?;

        keyed.sort_unstable();
        log::debug!("Sorted {} domains", keyed.len());

        Ok(keyed
            .into_iter()
            .map(|(_, index)| items[index].clone())
            .collect())
    }
}
