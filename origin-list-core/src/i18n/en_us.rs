//! English messages (en-US)

use super::keys::{Messages, SliderTexts, StatusTexts};

pub const MESSAGES: Messages = Messages {
    status: StatusTexts {
        block: "Blocked XXX from tracking you",
        noaction: "XXX doesn't appear to be tracking you",
        allow: "Allowed XXX, which may be tracking you",
    },
    dnt_tooltip: "This domain promises not to track you.",
    slider: SliderTexts {
        block: "Block this domain entirely",
        cookieblock: "Allow requests but block cookies from this domain",
        allow: "Allow this domain",
    },
    feed_the_badger_title: "Click to return control of this domain to the badger",
};
