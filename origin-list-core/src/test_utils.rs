//! Test helpers
//!
//! Mock resolvers and service factories.

use std::sync::Arc;

use crate::error::{OriginListError, OriginListResult};
use crate::i18n::{BuiltinCatalog, Language};
use crate::services::{DomainOrderingService, OriginListService};
use crate::traits::{BaseDomainResolver, LastLabelsResolver};

// ===== FailingResolver =====

/// Resolver that is always unavailable.
pub struct FailingResolver;

impl BaseDomainResolver for FailingResolver {
    fn base_domain_of(&self, hostname: &str) -> OriginListResult<String> {
        Err(OriginListError::BaseDomainUnavailable {
            hostname: hostname.to_string(),
            reason: "resolver offline".to_string(),
        })
    }
}

// ===== Factories =====

pub fn last_labels_service() -> DomainOrderingService {
    DomainOrderingService::new(Arc::new(LastLabelsResolver))
}

pub fn origin_list_service() -> OriginListService {
    OriginListService::new(
        last_labels_service(),
        Arc::new(BuiltinCatalog::new(Language::EnUs)),
    )
}
