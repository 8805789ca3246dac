//! Origin related type definitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::action::ActionKind;

/// Marker for a blocked origin
pub const BLOCK_MARKER: &str = "block";
/// Marker for a cookie-blocked origin
pub const COOKIEBLOCK_MARKER: &str = "cookieblock";
/// Marker for an allowed origin
pub const ALLOW_MARKER: &str = "allow";
/// Marker for an unclassified origin
pub const NOACTION_MARKER: &str = "noaction";
/// Sticky marker set once the user has chosen an action
pub const USER_OVERRIDE_MARKER: &str = "userset";

/// The four mutually exclusive action markers.
pub const ACTION_MARKERS: [&str; 4] = [
    BLOCK_MARKER,
    COOKIEBLOCK_MARKER,
    ALLOW_MARKER,
    NOACTION_MARKER,
];

/// One row of the popup origin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginRecord {
    pub hostname: String,
    pub action: ActionKind,
    #[serde(default)]
    pub is_user_override: bool,
    /// Display-only: the origin declared DNT compliance.
    #[serde(default)]
    pub is_dnt_whitelisted: bool,
}

impl OriginRecord {
    /// Create a record as classified, without user override.
    #[must_use]
    pub fn new(hostname: impl Into<String>, action: ActionKind) -> Self {
        Self {
            hostname: hostname.into(),
            action,
            is_user_override: false,
            is_dnt_whitelisted: false,
        }
    }

    /// Mark as DNT compliant
    #[must_use]
    pub fn dnt_whitelisted(mut self, whitelisted: bool) -> Self {
        self.is_dnt_whitelisted = whitelisted;
        self
    }

    /// The record that replaces this one after the user picks `action`.
    #[must_use]
    pub fn with_user_override(&self, action: ActionKind) -> Self {
        Self {
            hostname: self.hostname.clone(),
            action,
            is_user_override: true,
            is_dnt_whitelisted: self.is_dnt_whitelisted,
        }
    }

    /// Typed control state of this record.
    pub fn state(&self) -> OriginState {
        OriginState {
            action: self.action,
            user_override: self.is_user_override,
        }
    }
}

/// The popup origin list. Replaced wholesale, never partially mutated.
pub type DomainList = Vec<OriginRecord>;

/// Control state of an origin: the effective action and whether the user set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginState {
    pub action: ActionKind,
    pub user_override: bool,
}

impl OriginState {
    /// Apply a user choice. The override flag is sticky.
    #[must_use]
    pub fn with_user_override(self, action: ActionKind) -> Self {
        Self {
            action,
            user_override: true,
        }
    }
}

impl Default for OriginState {
    fn default() -> Self {
        Self {
            action: ActionKind::NoAction,
            user_override: false,
        }
    }
}

/// Untyped marker set attached to a presentation element.
///
/// Only used at the boundary with external presentation state; see
/// [`OriginState`] for the typed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMarkers(BTreeSet<String>);

impl ActionMarkers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }

    pub fn insert(&mut self, marker: impl Into<String>) -> bool {
        self.0.insert(marker.into())
    }

    pub fn remove(&mut self, marker: &str) -> bool {
        self.0.remove(marker)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Encode a typed state as markers.
    pub fn from_state(state: OriginState) -> Self {
        let mut markers = Self::new();
        markers.insert(marker_of(state.action));
        if state.user_override {
            markers.insert(USER_OVERRIDE_MARKER);
        }
        markers
    }
}

impl<S: Into<String>> FromIterator<S> for ActionMarkers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The marker an action is presented with. DNT shares the allow marker.
pub fn marker_of(action: ActionKind) -> &'static str {
    match action.collapsed() {
        ActionKind::Block => BLOCK_MARKER,
        ActionKind::CookieBlock => COOKIEBLOCK_MARKER,
        ActionKind::NoAction => NOACTION_MARKER,
        ActionKind::Allow | ActionKind::DoNotTrack => ALLOW_MARKER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_override_replaces_action_and_sticks() {
        let record = OriginRecord::new("ads.example.com", ActionKind::Block).dnt_whitelisted(true);
        let toggled = record.with_user_override(ActionKind::Allow);

        assert_eq!(toggled.hostname, "ads.example.com");
        assert_eq!(toggled.action, ActionKind::Allow);
        assert!(toggled.is_user_override);
        assert!(toggled.is_dnt_whitelisted);
        // the original is untouched
        assert!(!record.is_user_override);
    }

    #[test]
    fn state_override_is_sticky() {
        let state = OriginState::default()
            .with_user_override(ActionKind::Block)
            .with_user_override(ActionKind::CookieBlock);
        assert_eq!(state.action, ActionKind::CookieBlock);
        assert!(state.user_override);
    }

    #[test]
    fn markers_from_state() {
        let markers = ActionMarkers::from_state(OriginState {
            action: ActionKind::DoNotTrack,
            user_override: true,
        });
        assert!(markers.contains(ALLOW_MARKER));
        assert!(markers.contains(USER_OVERRIDE_MARKER));
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn record_serde_defaults_flags() {
        let record: OriginRecord =
            serde_json::from_str(r#"{"hostname":"cdn.example.net","action":"cookieblock"}"#)
                .unwrap();
        assert_eq!(
            record,
            OriginRecord::new("cdn.example.net", ActionKind::CookieBlock)
        );
    }
}
