//! Host capability abstract trait definitions

mod base_domain_resolver;
mod message_catalog;

pub(crate) use base_domain_resolver::validate_hostname;
pub use base_domain_resolver::{BaseDomainResolver, LastLabelsResolver, StaticBaseDomainResolver};
pub use message_catalog::{MessageCatalog, MessageId, ORIGIN_PLACEHOLDER};
