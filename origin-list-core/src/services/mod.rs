//! Service layer

pub mod action_state;
mod domain_ordering;
mod origin_list_service;

pub use action_state::{
    apply_user_override, current_action_of, describe_action, is_selected, state_of,
};
pub use domain_ordering::{DomainOrderingService, OrderingOptions};
pub use origin_list_service::OriginListService;

use std::sync::Arc;

use crate::config::OriginListConfig;
use crate::error::OriginListResult;
use crate::i18n::BuiltinCatalog;
use crate::traits::{
    BaseDomainResolver, LastLabelsResolver, MessageCatalog, StaticBaseDomainResolver,
};

/// Service context - holds all host capabilities
///
/// The host creates this context and injects its resolver and message catalog.
pub struct ServiceContext {
    /// Base domain resolver
    pub resolver: Arc<dyn BaseDomainResolver>,
    /// Localized messages
    pub catalog: Arc<dyn MessageCatalog>,
    /// Ordering options
    pub ordering_options: OrderingOptions,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(resolver: Arc<dyn BaseDomainResolver>, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            resolver,
            catalog,
            ordering_options: OrderingOptions::default(),
        }
    }

    /// Build a context from configuration, using the built-in catalog.
    ///
    /// With an empty `staticBaseDomains` table the last two labels are taken as the
    /// base domain, which splits multi-label suffixes (`example.co.uk` groups under
    /// `co.uk`). Hosts should seed `staticBaseDomains` from their own public suffix
    /// lookup.
    pub fn from_config(config: &OriginListConfig) -> OriginListResult<Self> {
        config.validate()?;
        let language = config.language()?;

        let resolver: Arc<dyn BaseDomainResolver> = if config.static_base_domains.is_empty() {
            Arc::new(LastLabelsResolver)
        } else {
            let mut table: StaticBaseDomainResolver = config
                .static_base_domains
                .iter()
                .map(|(h, b)| (h.as_str(), b.as_str()))
                .collect();
            if config.fallback_to_last_labels {
                table = table.with_fallback(Arc::new(LastLabelsResolver));
            }
            Arc::new(table)
        };

        log::debug!(
            "Origin list context: language={}, {} static base domains",
            language.code(),
            config.static_base_domains.len()
        );

        Ok(Self {
            resolver,
            catalog: Arc::new(BuiltinCatalog::new(language)),
            ordering_options: config.ordering_options(),
        })
    }

    /// Domain ordering service over this context's resolver
    pub fn ordering_service(&self) -> DomainOrderingService {
        DomainOrderingService::with_options(Arc::clone(&self.resolver), self.ordering_options)
    }

    /// Origin list service over this context
    pub fn origin_list_service(&self) -> OriginListService {
        OriginListService::new(self.ordering_service(), Arc::clone(&self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_from_default_config() {
        let ctx = ServiceContext::from_config(&OriginListConfig::default()).unwrap();
        let sorted = ctx
            .ordering_service()
            .sort_domains(&["b.com", "a.com"])
            .unwrap();
        assert_eq!(sorted, vec!["a.com", "b.com"]);
    }

    #[test]
    fn context_uses_static_table_then_fallback() {
        let config = OriginListConfig::from_json_str(
            r#"{"staticBaseDomains":{"www.example.co.uk":"example.co.uk"}}"#,
        )
        .unwrap();
        let ctx = ServiceContext::from_config(&config).unwrap();
        let service = ctx.ordering_service();

        let key = service.sort_key_of("www.example.co.uk").unwrap();
        assert_eq!(key.combined(), "example.www");
        // unregistered hosts fall back to the last two labels
        let key = service.sort_key_of("cdn.tracker.net").unwrap();
        assert_eq!(key.combined(), "tracker.cdn");
    }

    #[test]
    fn default_context_splits_multi_label_suffixes() {
        let ctx = ServiceContext::from_config(&OriginListConfig::default()).unwrap();
        let key = ctx.ordering_service().sort_key_of("www.example.co.uk").unwrap();
        assert_eq!(key.base_part, "co");
        assert_eq!(key.combined(), "co.example.www");

        let seeded = OriginListConfig::from_json_str(
            r#"{"staticBaseDomains":{"www.example.co.uk":"example.co.uk"}}"#,
        )
        .unwrap();
        let ctx = ServiceContext::from_config(&seeded).unwrap();
        let key = ctx.ordering_service().sort_key_of("www.example.co.uk").unwrap();
        assert_eq!(key.base_part, "example");
    }

    #[test]
    fn context_without_fallback_rejects_unregistered() {
        let config = OriginListConfig::from_json_str(
            r#"{"staticBaseDomains":{"a.example.com":"example.com"},"fallbackToLastLabels":false}"#,
        )
        .unwrap();
        let ctx = ServiceContext::from_config(&config).unwrap();
        assert!(ctx.ordering_service().sort_key_of("b.other.com").is_err());
    }

    #[test]
    fn context_language_selects_catalog() {
        let config = OriginListConfig::from_json_str(r#"{"language":"zh-CN"}"#).unwrap();
        let ctx = ServiceContext::from_config(&config).unwrap();
        let text = describe_action(
            &crate::types::ActionKind::Block.into(),
            "ads.example.com",
            false,
            ctx.catalog.as_ref(),
        );
        assert_eq!(text, "已阻止 ads.example.com 跟踪您");
    }
}
