//! Localized message lookup abstract Trait

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the origin in status templates.
pub const ORIGIN_PLACEHOLDER: &str = "XXX";

/// Identifier of a localized popup message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    /// Template for blocked and cookie-blocked origins
    BadgerStatusBlock,
    /// Template for unclassified origins
    BadgerStatusNoaction,
    /// Template for allowed origins
    BadgerStatusAllow,
    /// Fixed description of a DNT-compliant origin
    DntTooltip,
    DomainSliderBlockTooltip,
    DomainSliderCookieblockTooltip,
    DomainSliderAllowTooltip,
    /// Undo arrow tooltip
    FeedTheBadgerTitle,
}

impl MessageId {
    pub const ALL: [MessageId; 8] = [
        MessageId::BadgerStatusBlock,
        MessageId::BadgerStatusNoaction,
        MessageId::BadgerStatusAllow,
        MessageId::DntTooltip,
        MessageId::DomainSliderBlockTooltip,
        MessageId::DomainSliderCookieblockTooltip,
        MessageId::DomainSliderAllowTooltip,
        MessageId::FeedTheBadgerTitle,
    ];

    /// Message key in the extension's locale files.
    pub fn key(self) -> &'static str {
        match self {
            Self::BadgerStatusBlock => "badger_status_block",
            Self::BadgerStatusNoaction => "badger_status_noaction",
            Self::BadgerStatusAllow => "badger_status_allow",
            Self::DntTooltip => "dnt_tooltip",
            Self::DomainSliderBlockTooltip => "domain_slider_block_tooltip",
            Self::DomainSliderCookieblockTooltip => "domain_slider_cookieblock_tooltip",
            Self::DomainSliderAllowTooltip => "domain_slider_allow_tooltip",
            Self::FeedTheBadgerTitle => "feed_the_badger_title",
        }
    }

    /// Reverse of [`MessageId::key`].
    pub fn from_key(key: &str) -> Option<MessageId> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Message Catalog Trait
///
/// Read-only lookup, built once and shared by reference.
pub trait MessageCatalog: Send + Sync {
    /// Localized text for `id`, `None` when the catalog lacks it.
    fn message(&self, id: MessageId) -> Option<&str>;

    /// Localized text for `id`, or the message key when missing.
    fn message_or_key(&self, id: MessageId) -> &str {
        match self.message(id) {
            Some(text) => text,
            None => {
                log::warn!("Missing localized message: {id}");
                id.key()
            }
        }
    }
}
