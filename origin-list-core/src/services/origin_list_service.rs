//! Origin list service
//!
//! Builds the per-row view models of the popup origin list and applies user
//! toggles to a [`DomainList`].

use std::sync::Arc;

use crate::error::OriginListResult;
use crate::traits::{MessageCatalog, MessageId};
use crate::types::{
    marker_of, ActionKind, DomainList, OriginRecord, OriginView, ParsedAction, ToggleStyle,
    ROW_CLASS, USER_OVERRIDE_MARKER,
};

use super::action_state::{describe_action, is_selected};
use super::domain_ordering::DomainOrderingService;

/// Action controls of a row, in display order.
const CONTROLS: [ActionKind; 4] = [
    ActionKind::Block,
    ActionKind::CookieBlock,
    ActionKind::Allow,
    ActionKind::NoAction,
];

/// Origin list service
pub struct OriginListService {
    ordering: DomainOrderingService,
    catalog: Arc<dyn MessageCatalog>,
}

impl OriginListService {
    /// Create an origin list service
    #[must_use]
    pub fn new(ordering: DomainOrderingService, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self { ordering, catalog }
    }

    /// Sorted view models for a whole list.
    pub fn render(&self, list: &[OriginRecord]) -> OriginListResult<Vec<OriginView>> {
        let sorted = self.ordering.sort_origins(list)?;
        Ok(sorted
            .iter()
            .map(|record| self.build_view(record, &record.hostname))
            .collect())
    }

    /// Sorted view models serialized as a JSON array, for the popup script.
    pub fn render_json(&self, list: &[OriginRecord]) -> OriginListResult<String> {
        let views = self.render(list)?;
        Ok(serde_json::to_string(&views)?)
    }

    /// View model of one typed record.
    pub fn build_view(&self, record: &OriginRecord, owner: &str) -> OriginView {
        self.view_of(
            &record.hostname,
            owner,
            &ParsedAction::Known(record.action),
            record.is_user_override,
            record.is_dnt_whitelisted,
        )
    }

    /// View model from an untyped stored action such as `user_block`.
    ///
    /// Unrecognized actions still produce a row; the description falls back to `owner`.
    pub fn build_view_from_stored(
        &self,
        origin: &str,
        owner: &str,
        stored_action: &str,
        is_whitelisted: bool,
    ) -> OriginView {
        let (action, user_override) = ParsedAction::from_stored(stored_action);
        self.view_of(origin, owner, &action, user_override, is_whitelisted)
    }

    /// New list with `hostname` switched to `action` by the user.
    ///
    /// Unknown hostnames leave the list unchanged.
    pub fn toggle(&self, list: &[OriginRecord], hostname: &str, action: ActionKind) -> DomainList {
        let mut found = false;
        let next: DomainList = list
            .iter()
            .map(|record| {
                if record.hostname == hostname {
                    found = true;
                    record.with_user_override(action)
                } else {
                    record.clone()
                }
            })
            .collect();
        if !found {
            log::debug!("Toggle for unlisted origin {hostname} ignored");
        }
        next
    }

    fn view_of(
        &self,
        origin: &str,
        owner: &str,
        action: &ParsedAction,
        user_override: bool,
        is_whitelisted: bool,
    ) -> OriginView {
        let kind = action.kind();

        let mut classes = vec![ROW_CLASS.to_string()];
        if user_override {
            classes.push(USER_OVERRIDE_MARKER.to_string());
        }
        if let Some(kind) = kind {
            classes.push(marker_of(kind).to_string());
        }

        let selected = kind.and_then(|k| CONTROLS.into_iter().find(|c| is_selected(*c, k)));
        let slider_tooltip = selected
            .and_then(slider_tooltip_id)
            .map(|id| self.catalog.message_or_key(id).to_string());

        OriginView {
            origin: origin.to_string(),
            owner: owner.to_string(),
            action: kind,
            classes,
            selected,
            description: describe_action(action, owner, is_whitelisted, self.catalog.as_ref()),
            toggle_label: kind.and_then(ActionKind::toggle_label),
            toggle_style: kind.map_or(ToggleStyle::UnblockButton, ActionKind::toggle_style),
            slider_tooltip,
            dnt_compliant: is_whitelisted,
            undo_tooltip: self
                .catalog
                .message_or_key(MessageId::FeedTheBadgerTitle)
                .to_string(),
        }
    }
}

fn slider_tooltip_id(control: ActionKind) -> Option<MessageId> {
    match control {
        ActionKind::Block => Some(MessageId::DomainSliderBlockTooltip),
        ActionKind::CookieBlock => Some(MessageId::DomainSliderCookieblockTooltip),
        ActionKind::Allow => Some(MessageId::DomainSliderAllowTooltip),
        ActionKind::NoAction | ActionKind::DoNotTrack => None,
    }
}
