//! Origin List Core Library
//!
//! Decision logic behind the per-origin tracking controls of the extension popup:
//! - Action state model: which control is selected, how a state is described,
//!   how a user toggle rewrites state
//! - Domain ordering: groups origins by registrable base domain and orders
//!   subdomains under their base
//!
//! Public suffix data and localized strings are host capabilities, injected
//! through the [`BaseDomainResolver`] and [`MessageCatalog`] traits. Markup is
//! left to the host; this crate stops at [`types::OriginView`].

pub mod config;
pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ConfigSource, JsonFileConfigSource, OriginListConfig};
pub use error::{OriginListError, OriginListResult};
pub use services::{DomainOrderingService, OriginListService, ServiceContext};
pub use traits::{BaseDomainResolver, MessageCatalog};
pub use types::{ActionKind, OriginRecord, ParsedAction, SortKey};
