//! Tracking action type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix marking a stored action as chosen by the user (`user_block`).
const USER_PREFIX: &str = "user_";

/// Action applied to a third-party origin.
///
/// Exactly one applies to an origin at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Seen, but not (yet) classified as a tracker.
    #[serde(rename = "noaction")]
    NoAction,
    /// All requests blocked.
    #[serde(rename = "block")]
    Block,
    /// Requests allowed, cookies and referrers stripped.
    #[serde(rename = "cookieblock")]
    CookieBlock,
    /// Requests allowed.
    #[serde(rename = "allow")]
    Allow,
    /// Allowed because the origin declared Do Not Track compliance.
    #[serde(rename = "dnt")]
    DoNotTrack,
}

impl ActionKind {
    /// All variants, in control display order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Block,
        ActionKind::CookieBlock,
        ActionKind::Allow,
        ActionKind::NoAction,
        ActionKind::DoNotTrack,
    ];

    /// Stored / wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAction => "noaction",
            Self::Block => "block",
            Self::CookieBlock => "cookieblock",
            Self::Allow => "allow",
            Self::DoNotTrack => "dnt",
        }
    }

    /// The action this one is presented as in the control widget.
    ///
    /// A DNT-compliant origin looks exactly like an allowed one.
    #[must_use]
    pub fn collapsed(self) -> ActionKind {
        match self {
            Self::DoNotTrack => Self::Allow,
            other => other,
        }
    }

    /// Label of the toggle button shown for an origin in this state.
    ///
    /// `None` for the allowed states, which have no label entry.
    pub fn toggle_label(self) -> Option<&'static str> {
        match self {
            Self::Block => Some("Unblock"),
            Self::CookieBlock | Self::NoAction => Some("Block"),
            Self::Allow | Self::DoNotTrack => None,
        }
    }

    /// Visual style of the toggle button.
    pub fn toggle_style(self) -> ToggleStyle {
        if self.toggle_label() == Some("Block") {
            ToggleStyle::BlockButton
        } else {
            ToggleStyle::UnblockButton
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noaction" => Ok(Self::NoAction),
            "block" => Ok(Self::Block),
            "cookieblock" => Ok(Self::CookieBlock),
            "allow" => Ok(Self::Allow),
            "dnt" => Ok(Self::DoNotTrack),
            _ => Err(format!("Unsupported action: {s}")),
        }
    }
}

/// Toggle button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleStyle {
    BlockButton,
    UnblockButton,
}

/// An action decoded from untyped external state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAction {
    Known(ActionKind),
    /// Unrecognized value, kept verbatim for display.
    Unknown(String),
}

impl ParsedAction {
    /// Decode a stored action string such as `block` or `user_cookieblock`.
    ///
    /// Returns the action and whether it carried the user-override prefix.
    pub fn from_stored(raw: &str) -> (ParsedAction, bool) {
        let (value, user_override) = match raw.strip_prefix(USER_PREFIX) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let parsed = match value.parse::<ActionKind>() {
            Ok(kind) => ParsedAction::Known(kind),
            Err(_) => {
                log::warn!("Unrecognized stored action: {raw}");
                ParsedAction::Unknown(value.to_string())
            }
        };
        (parsed, user_override)
    }

    /// The known action, if any.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unknown(_) => None,
        }
    }
}

impl From<ActionKind> for ParsedAction {
    fn from(kind: ActionKind) -> Self {
        Self::Known(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_wire_name() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.as_str().parse::<ActionKind>().unwrap(), kind);
        }
        assert!("BLOCK".parse::<ActionKind>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&ActionKind::CookieBlock).unwrap();
        assert_eq!(json, "\"cookieblock\"");
        let kind: ActionKind = serde_json::from_str("\"dnt\"").unwrap();
        assert_eq!(kind, ActionKind::DoNotTrack);
    }

    #[test]
    fn dnt_collapses_to_allow() {
        assert_eq!(ActionKind::DoNotTrack.collapsed(), ActionKind::Allow);
        assert_eq!(ActionKind::NoAction.collapsed(), ActionKind::NoAction);
    }

    #[test]
    fn toggle_labels() {
        assert_eq!(ActionKind::Block.toggle_label(), Some("Unblock"));
        assert_eq!(ActionKind::CookieBlock.toggle_label(), Some("Block"));
        assert_eq!(ActionKind::NoAction.toggle_label(), Some("Block"));
        assert_eq!(ActionKind::Allow.toggle_label(), None);

        assert_eq!(ActionKind::NoAction.toggle_style(), ToggleStyle::BlockButton);
        assert_eq!(ActionKind::Block.toggle_style(), ToggleStyle::UnblockButton);
        assert_eq!(ActionKind::Allow.toggle_style(), ToggleStyle::UnblockButton);
        assert_eq!(
            serde_json::to_value(ToggleStyle::UnblockButton).unwrap(),
            "unblockButton"
        );
    }

    #[test]
    fn from_stored_strips_user_prefix() {
        assert_eq!(
            ParsedAction::from_stored("user_block"),
            (ParsedAction::Known(ActionKind::Block), true)
        );
        assert_eq!(
            ParsedAction::from_stored("cookieblock"),
            (ParsedAction::Known(ActionKind::CookieBlock), false)
        );
    }

    #[test]
    fn from_stored_keeps_unknown_value() {
        let (parsed, user_override) = ParsedAction::from_stored("user_quarantine");
        assert_eq!(parsed, ParsedAction::Unknown("quarantine".to_string()));
        assert!(user_override);
        assert_eq!(parsed.kind(), None);
    }
}
