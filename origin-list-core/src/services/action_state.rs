//! Action state model
//!
//! Reconciles an origin's classification, user override and DNT exemption into
//! what the popup controls show. Every function here is total: presentation must
//! always render something, so unrecognized input degrades to a fallback.

use crate::traits::{MessageCatalog, MessageId, ORIGIN_PLACEHOLDER};
use crate::types::{
    marker_of, ActionKind, ActionMarkers, OriginState, ParsedAction, ACTION_MARKERS,
    ALLOW_MARKER, BLOCK_MARKER, COOKIEBLOCK_MARKER, USER_OVERRIDE_MARKER,
};

/// Whether the control for `candidate` is the selected one for an origin in `origin_action`.
///
/// `DoNotTrack` is treated as `Allow` for this comparison only.
pub fn is_selected(candidate: ActionKind, origin_action: ActionKind) -> bool {
    candidate == origin_action.collapsed()
}

/// Status template for an action, `None` for actions without one.
fn template_id(action: &ParsedAction) -> Option<MessageId> {
    match action {
        ParsedAction::Known(ActionKind::Block | ActionKind::CookieBlock) => {
            Some(MessageId::BadgerStatusBlock)
        }
        ParsedAction::Known(ActionKind::NoAction) => Some(MessageId::BadgerStatusNoaction),
        ParsedAction::Known(ActionKind::Allow) => Some(MessageId::BadgerStatusAllow),
        ParsedAction::Known(ActionKind::DoNotTrack) | ParsedAction::Unknown(_) => None,
    }
}

/// Human-readable description of an origin's state.
///
/// A DNT-whitelisted origin always gets the fixed compliance description.
/// Otherwise the action's template with `XXX` replaced by `origin`; actions
/// without a template (and templates the catalog lacks) yield `origin` itself.
pub fn describe_action<C>(
    action: &ParsedAction,
    origin: &str,
    is_whitelisted: bool,
    catalog: &C,
) -> String
where
    C: MessageCatalog + ?Sized,
{
    if is_whitelisted {
        return catalog.message_or_key(MessageId::DntTooltip).to_string();
    }

    let Some(id) = template_id(action) else {
        return origin.to_string();
    };

    match catalog.message(id) {
        Some(template) => template.replacen(ORIGIN_PLACEHOLDER, origin, 1),
        None => {
            log::warn!("Missing status template {id}, describing {origin} by name");
            origin.to_string()
        }
    }
}

/// Decode the current action from an untyped marker set.
///
/// Priority `Block > CookieBlock > Allow > NoAction`; `NoAction` when no marker matches.
pub fn current_action_of(markers: &ActionMarkers) -> ActionKind {
    if markers.contains(BLOCK_MARKER) {
        ActionKind::Block
    } else if markers.contains(COOKIEBLOCK_MARKER) {
        ActionKind::CookieBlock
    } else if markers.contains(ALLOW_MARKER) {
        ActionKind::Allow
    } else {
        ActionKind::NoAction
    }
}

/// Decode the full control state from an untyped marker set.
pub fn state_of(markers: &ActionMarkers) -> OriginState {
    OriginState {
        action: current_action_of(markers),
        user_override: markers.contains(USER_OVERRIDE_MARKER),
    }
}

/// Marker set after the user picks `new_action`.
///
/// All action markers are replaced by the new one and the sticky user-override
/// marker is added. Other markers are kept. Idempotent.
pub fn apply_user_override(current: &ActionMarkers, new_action: ActionKind) -> ActionMarkers {
    let mut next = current.clone();
    for marker in ACTION_MARKERS {
        next.remove(marker);
    }
    next.insert(marker_of(new_action));
    next.insert(USER_OVERRIDE_MARKER);
    next
}
