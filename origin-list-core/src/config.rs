//! Configuration

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OriginListError, OriginListResult};
use crate::i18n::Language;
use crate::services::OrderingOptions;
use crate::traits::validate_hostname;

/// Origin list configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginListConfig {
    /// BCP 47 code of the message language
    pub language: String,
    /// Compare base domains without their top-level suffix
    pub strip_top_level_suffix: bool,
    /// Known hostname -> base domain pairs, consulted before the fallback
    pub static_base_domains: BTreeMap<String, String>,
    /// Resolve hostnames missing from `static_base_domains` by their last two labels
    pub fallback_to_last_labels: bool,
}

impl Default for OriginListConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            strip_top_level_suffix: true,
            static_base_domains: BTreeMap::new(),
            fallback_to_last_labels: true,
        }
    }
}

impl OriginListConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> OriginListResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OriginListError::Config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: &Path) -> OriginListResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            OriginListError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check the language code and the static base domain table
    pub fn validate(&self) -> OriginListResult<()> {
        self.language()?;
        for (hostname, base) in &self.static_base_domains {
            validate_hostname(hostname)
                .map_err(|_| OriginListError::Config(format!("Invalid hostname: {hostname:?}")))?;
            let is_suffix = hostname == base
                || hostname
                    .strip_suffix(base.as_str())
                    .is_some_and(|rest| rest.ends_with('.'));
            if !is_suffix {
                return Err(OriginListError::Config(format!(
                    "Base domain {base} is not a suffix of {hostname}"
                )));
            }
        }
        Ok(())
    }

    /// Parsed message language
    pub fn language(&self) -> OriginListResult<Language> {
        Language::from_code(&self.language).ok_or_else(|| {
            OriginListError::Config(format!("Unsupported language: {}", self.language))
        })
    }

    pub fn ordering_options(&self) -> OrderingOptions {
        OrderingOptions {
            strip_top_level_suffix: self.strip_top_level_suffix,
        }
    }
}

/// Config source trait
pub trait ConfigSource: Send + Sync {
    /// Load configuration
    fn load(&self) -> OriginListResult<OriginListConfig>;
}

/// JSON file config source. A missing file yields the default config.
#[derive(Debug, Clone)]
pub struct JsonFileConfigSource {
    path: PathBuf,
}

impl JsonFileConfigSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for JsonFileConfigSource {
    fn load(&self) -> OriginListResult<OriginListConfig> {
        if !self.path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(OriginListConfig::default());
        }
        OriginListConfig::from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = OriginListConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language().unwrap(), Language::EnUs);
        assert!(config.ordering_options().strip_top_level_suffix);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = OriginListConfig::from_json_str(r#"{"language":"zh-CN"}"#).unwrap();
        assert_eq!(config.language().unwrap(), Language::ZhCn);
        assert!(config.strip_top_level_suffix);
        assert!(config.fallback_to_last_labels);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = OriginListConfig::from_json_str(r#"{"language":"xx-YY"}"#).unwrap_err();
        assert!(matches!(err, OriginListError::Config(_)));
        assert!(err.is_expected());
    }

    #[test]
    fn base_must_be_suffix_of_hostname() {
        let err = OriginListConfig::from_json_str(
            r#"{"staticBaseDomains":{"cdn.example.com":"other.org"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a suffix"));

        let ok = OriginListConfig::from_json_str(
            r#"{"staticBaseDomains":{"cdn.example.co.uk":"example.co.uk"}}"#,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = OriginListConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, OriginListError::Config(_)));
    }
}
