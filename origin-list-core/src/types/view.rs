//! Origin row view model

use serde::Serialize;

use super::action::{ActionKind, ToggleStyle};

/// Class always present on an origin row
pub const ROW_CLASS: &str = "clicker";

/// Everything the popup needs to render one origin row, without markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginView {
    /// Hostname shown in the row
    pub origin: String,
    /// Hostname the row describes and acts on
    pub owner: String,
    /// Decoded action, `None` when the stored value was unrecognized
    pub action: Option<ActionKind>,
    /// Row classes: `clicker`, then `userset` and the action marker when present
    pub classes: Vec<String>,
    /// Action control shown as selected
    pub selected: Option<ActionKind>,
    /// Tooltip description of the current state
    pub description: String,
    pub toggle_label: Option<&'static str>,
    pub toggle_style: ToggleStyle,
    /// Tooltip of the selected slider position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_tooltip: Option<String>,
    /// Show the DNT compliance badge
    pub dnt_compliant: bool,
    /// Tooltip of the undo arrow
    pub undo_tooltip: String,
}

impl OriginView {
    /// Whether the row is marked as user-set
    pub fn is_user_set(&self) -> bool {
        self.classes.iter().any(|c| c == super::USER_OVERRIDE_MARKER)
    }
}
