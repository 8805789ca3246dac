//! Message text definitions
//!
//! One struct per language, checked at compile time. Status templates carry the
//! `XXX` placeholder that is replaced with the origin.

use crate::traits::MessageId;

/// All popup messages of one language
pub struct Messages {
    /// Origin status templates
    pub status: StatusTexts,
    /// DNT compliance description
    pub dnt_tooltip: &'static str,
    /// Action slider tooltips
    pub slider: SliderTexts,
    /// Undo arrow tooltip
    pub feed_the_badger_title: &'static str,
}

/// Origin status templates
pub struct StatusTexts {
    pub block: &'static str,
    pub noaction: &'static str,
    pub allow: &'static str,
}

/// Action slider tooltips
pub struct SliderTexts {
    pub block: &'static str,
    pub cookieblock: &'static str,
    pub allow: &'static str,
}

impl Messages {
    /// Text for a message identifier
    pub fn get(&self, id: MessageId) -> &'static str {
        match id {
            MessageId::BadgerStatusBlock => self.status.block,
            MessageId::BadgerStatusNoaction => self.status.noaction,
            MessageId::BadgerStatusAllow => self.status.allow,
            MessageId::DntTooltip => self.dnt_tooltip,
            MessageId::DomainSliderBlockTooltip => self.slider.block,
            MessageId::DomainSliderCookieblockTooltip => self.slider.cookieblock,
            MessageId::DomainSliderAllowTooltip => self.slider.allow,
            MessageId::FeedTheBadgerTitle => self.feed_the_badger_title,
        }
    }
}
