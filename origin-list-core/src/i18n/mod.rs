//! Built-in localized messages
//!
//! Plain Rust structs per language, so a missing message is a compile error
//! rather than a runtime fallback. Hosts with their own locale files implement
//! [`MessageCatalog`] directly.

mod en_us;
pub mod keys;
mod zh_cn;

use serde::{Deserialize, Serialize};

use crate::traits::{MessageCatalog, MessageId};
pub use keys::Messages;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Simplified Chinese
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }

    /// BCP 47 language code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// Parse from a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    /// Messages of this language
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::EnUs => &en_us::MESSAGES,
            Language::ZhCn => &zh_cn::MESSAGES,
        }
    }
}

/// [`MessageCatalog`] over the built-in messages of one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog {
    language: Language,
}

impl BuiltinCatalog {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn message(&self, id: MessageId) -> Option<&str> {
        Some(self.language.messages().get(id))
    }
}
