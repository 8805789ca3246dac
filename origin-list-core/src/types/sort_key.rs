//! Sort key type definition

use std::fmt;

use serde::Serialize;

/// Ordering key derived from a hostname.
///
/// Has no identity beyond comparison; compare through [`SortKey::combined`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    /// Base domain, usually without its top-level suffix.
    pub base_part: String,
    /// Labels left of the base domain, in reverse order.
    pub subdomain_part: String,
}

impl SortKey {
    /// `base_part + "." + subdomain_part`
    pub fn combined(&self) -> String {
        let mut out = String::with_capacity(self.base_part.len() + 1 + self.subdomain_part.len());
        out.push_str(&self.base_part);
        out.push('.');
        out.push_str(&self.subdomain_part);
        out
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base_part, self.subdomain_part)
    }
}
